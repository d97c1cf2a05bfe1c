//! Chunk worker implementation
//!
//! A `ChunkWorker` is the execution unit of the nearest search. Each worker owns
//! one contiguous index range of the coordinate collection and scans it
//! sequentially, keeping a running minimum distance to the target.
//!
//! # Thread Safety
//!
//! Workers only read the shared coordinate slice. The running minimum lives on
//! the worker's own stack and is handed back as a [`ChunkMinimum`] when the scan
//! finishes, so no locking is needed and the caller can merge results in a
//! fixed order.
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//! use nearport::worker::ChunkWorker;
//!
//! let coords = vec![
//!     Coordinate::new(40.6413, -73.7781),
//!     Coordinate::new(33.6407, -84.4277),
//! ];
//! let target = Coordinate::new(33.0, -84.0);
//!
//! let minimum = ChunkWorker::new(0, 0..coords.len()).scan(&target, &coords);
//! let best = minimum.best.unwrap();
//! assert_eq!(best.index, 1);
//! ```

use crate::geo::Coordinate;
use crate::search::SearchResult;
use serde::Serialize;
use std::ops::Range;

/// Local minimum reported by one worker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkMinimum {
    /// Chunk number (position in the partition)
    pub chunk: usize,
    /// First index of the chunk (inclusive)
    pub start: usize,
    /// End index of the chunk (exclusive)
    pub end: usize,
    /// Closest candidate in the chunk, `None` if the chunk was empty
    pub best: Option<SearchResult>,
}

impl ChunkMinimum {
    /// Number of candidates the chunk covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the chunk covered no candidates
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Sequential scanner for one chunk of the collection
#[derive(Debug, Clone)]
pub struct ChunkWorker {
    chunk: usize,
    range: Range<usize>,
}

impl ChunkWorker {
    /// Create a worker for `range` of the collection
    pub fn new(chunk: usize, range: Range<usize>) -> Self {
        Self { chunk, range }
    }

    /// Chunk number
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Scan the chunk and return its closest candidate
    ///
    /// Uses strict `<`, so among equally distant candidates the one with the
    /// lowest index wins. The first candidate is always taken, which means a
    /// one-element chunk returns that element whatever its distance.
    ///
    /// # Panics
    ///
    /// Panics if the worker's range is out of bounds for `coords`.
    pub fn scan(&self, target: &Coordinate, coords: &[Coordinate]) -> ChunkMinimum {
        let mut best: Option<SearchResult> = None;

        for (offset, coord) in coords[self.range.clone()].iter().enumerate() {
            let distance_km = target.distance_km(coord);
            let closer = match best {
                Some(ref current) => distance_km < current.distance_km,
                None => true,
            };
            if closer {
                best = Some(SearchResult {
                    coordinate: *coord,
                    distance_km,
                    index: self.range.start + offset,
                });
            }
        }

        ChunkMinimum {
            chunk: self.chunk,
            start: self.range.start,
            end: self.range.end,
            best,
        }
    }
}

/// Get the number of available parallel execution units
///
/// Returns the logical CPU count, never less than 1.
pub fn available_workers() -> usize {
    num_cpus::get().max(1)
}
