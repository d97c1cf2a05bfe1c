//! Chunk result aggregation
//!
//! Collects the per-chunk minimums produced by workers and reduces them into a
//! single global minimum. Each worker fills its own slot; the aggregator is only
//! touched by the coordinating thread after all workers have been joined.
//!
//! Reduction walks chunks in ascending chunk number and uses strict `<`, so on a
//! cross-chunk tie the candidate from the earlier chunk (and therefore the
//! earlier position in the collection) wins. This gives the same answer as a
//! sequential scan no matter how the workers were scheduled.
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//! use nearport::search::aggregator::CandidateAggregator;
//! use nearport::worker::ChunkWorker;
//!
//! let coords = vec![Coordinate::new(0.0, 90.0), Coordinate::new(0.0, -90.0)];
//! let target = Coordinate::new(0.0, 0.0);
//!
//! let mut aggregator = CandidateAggregator::new();
//! // Insertion order does not matter
//! aggregator.add_chunk(ChunkWorker::new(1, 1..2).scan(&target, &coords));
//! aggregator.add_chunk(ChunkWorker::new(0, 0..1).scan(&target, &coords));
//!
//! let best = aggregator.reduce().unwrap();
//! assert_eq!(best.coordinate, Coordinate::new(0.0, 90.0));
//! ```

use crate::search::SearchResult;
use crate::worker::ChunkMinimum;
use std::collections::BTreeMap;

/// Aggregator for per-chunk search results
///
/// Keyed by chunk number so iteration is always in partition order.
#[derive(Debug, Default)]
pub struct CandidateAggregator {
    chunks: BTreeMap<usize, ChunkMinimum>,
}

impl CandidateAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
        }
    }

    /// Add the result of one chunk
    ///
    /// A second result for the same chunk number replaces the first.
    pub fn add_chunk(&mut self, minimum: ChunkMinimum) {
        self.chunks.insert(minimum.chunk, minimum);
    }

    /// Get the number of chunks added
    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Total candidates covered by all chunks
    pub fn scanned(&self) -> usize {
        self.chunks.values().map(ChunkMinimum::len).sum()
    }

    /// Per-chunk results in chunk order
    pub fn per_chunk(&self) -> Vec<ChunkMinimum> {
        self.chunks.values().copied().collect()
    }

    /// Reduce all chunks to the global minimum
    ///
    /// Returns `None` when no chunk produced a candidate.
    pub fn reduce(&self) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;

        for candidate in self.chunks.values().filter_map(|c| c.best) {
            let closer = match best {
                Some(ref current) => candidate.distance_km < current.distance_km,
                None => true,
            };
            if closer {
                best = Some(candidate);
            }
        }

        best
    }
}
