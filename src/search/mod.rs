//! Parallel nearest-coordinate search
//!
//! This module finds the element of a coordinate collection closest to a target
//! by brute force, split across all available CPUs.
//!
//! # Algorithm
//!
//! 1. Resolve the worker count `P` (CPU count by default, never below 1, never
//!    above the number of candidates)
//! 2. Partition the collection into `P` contiguous chunks of `ceil(N / P)`
//! 3. Scan each non-empty chunk on its own thread, keeping a private minimum
//! 4. Join every worker, then reduce the chunk minimums in chunk order
//!
//! Step 4 uses strict `<` in chunk order, so ties resolve to the earliest element
//! in the collection, exactly as a sequential scan would. The result never
//! depends on thread scheduling.
//!
//! # Strategies
//!
//! - **Static**: one scoped thread per chunk, created and joined per search
//! - **WorkStealing**: up to `P × 4` smaller chunks scanned on a per-search
//!   rayon pool of `P` threads, for collections where chunks take uneven time
//!
//! Both strategies produce identical results.
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//! use nearport::search::find_nearest;
//!
//! let airports = vec![
//!     Coordinate::new(33.6407, -84.4277), // ATL
//!     Coordinate::new(40.6413, -73.7781), // JFK
//!     Coordinate::new(51.4700, -0.4543),  // LHR
//! ];
//!
//! let nearest = find_nearest(&Coordinate::new(40.7128, -74.0060), &airports)?;
//! assert_eq!(nearest.coordinate, airports[1]);
//! # Ok::<(), nearport::search::SearchError>(())
//! ```

pub mod aggregator;
pub mod partition;

use crate::config::SearchConfig;
use crate::geo::Coordinate;
use crate::worker::{available_workers, ChunkMinimum, ChunkWorker};
use aggregator::CandidateAggregator;
use partition::chunk_ranges;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Chunks per worker used by the work-stealing strategy
pub const STEAL_CHUNKS_PER_WORKER: usize = 4;

/// Errors returned by the nearest search
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Empty collection or invalid target coordinate
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A worker thread panicked while scanning its chunk
    #[error("worker for chunk {0} panicked")]
    WorkerPanicked(usize),

    /// The work-stealing thread pool could not be created
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Closest element found by a search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// Copy of the closest coordinate
    pub coordinate: Coordinate,
    /// Great-circle distance to the target in kilometers
    pub distance_km: f64,
    /// Position of the coordinate in the searched collection
    pub index: usize,
}

/// How chunks are dispatched to threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// One scoped thread per contiguous chunk
    #[default]
    Static,
    /// Smaller chunks scheduled on a rayon pool
    WorkStealing,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::WorkStealing => write!(f, "work-stealing"),
        }
    }
}

/// Full outcome of a search, including per-chunk detail
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Global nearest candidate
    pub result: SearchResult,
    /// Worker count used
    pub workers: usize,
    /// Dispatch strategy used
    pub strategy: SearchStrategy,
    /// Per-chunk minimums in chunk order (empty chunks included)
    pub chunks: Vec<ChunkMinimum>,
    /// Number of candidates scanned
    pub scanned: usize,
    /// Wall time spent in the search
    pub elapsed: Duration,
}

/// Parallel nearest-coordinate finder
///
/// # Example
///
/// ```
/// use nearport::geo::Coordinate;
/// use nearport::search::{NearestFinder, SearchStrategy};
///
/// let coords = vec![Coordinate::new(0.0, 90.0), Coordinate::new(0.0, -90.0)];
/// let finder = NearestFinder::new()
///     .with_workers(2)
///     .with_strategy(SearchStrategy::WorkStealing);
///
/// let report = finder.search(&Coordinate::new(0.0, 0.0), &coords)?;
/// assert_eq!(report.result.index, 0);
/// assert_eq!(report.workers, 2);
/// # Ok::<(), nearport::search::SearchError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestFinder {
    workers: Option<usize>,
    strategy: SearchStrategy,
}

impl NearestFinder {
    /// Create a finder using every available CPU and the static strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the worker count (0 is treated as 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Select the dispatch strategy
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Requested worker count
    ///
    /// A search never runs more workers than there are candidates, so
    /// `SearchReport::workers` may be lower.
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(available_workers).max(1)
    }

    /// Dispatch strategy this finder will use
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Find the element of `coords` closest to `target`
    pub fn find(&self, target: &Coordinate, coords: &[Coordinate]) -> Result<SearchResult, SearchError> {
        self.search(target, coords).map(|report| report.result)
    }

    /// Find the closest element and report per-chunk detail
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `coords` is empty or `target` is out of range
    /// - `WorkerPanicked` if a static-strategy worker thread panicked
    /// - `ThreadPool` if the work-stealing pool could not be built
    pub fn search(&self, target: &Coordinate, coords: &[Coordinate]) -> Result<SearchReport, SearchError> {
        if coords.is_empty() {
            return Err(SearchError::InvalidArgument(
                "coordinate collection is empty".to_string(),
            ));
        }
        target
            .validate()
            .map_err(|e| SearchError::InvalidArgument(format!("target {}: {}", target, e)))?;

        // Worker count never changes the result, only how the scan is split
        let workers = self.workers().min(coords.len());
        let start = Instant::now();

        let aggregator = match self.strategy {
            SearchStrategy::Static => scan_static(target, coords, workers)?,
            SearchStrategy::WorkStealing => scan_work_stealing(target, coords, workers)?,
        };

        // Non-empty input always yields a candidate
        let result = aggregator.reduce().ok_or_else(|| {
            SearchError::InvalidArgument("no candidate produced".to_string())
        })?;
        let elapsed = start.elapsed();

        tracing::debug!(
            workers,
            strategy = %self.strategy,
            chunks = aggregator.num_chunks(),
            scanned = aggregator.scanned(),
            index = result.index,
            distance_km = result.distance_km,
            elapsed_us = elapsed.as_micros() as u64,
            "Nearest search complete"
        );

        Ok(SearchReport {
            result,
            workers,
            strategy: self.strategy,
            chunks: aggregator.per_chunk(),
            scanned: aggregator.scanned(),
            elapsed,
        })
    }
}

impl From<&SearchConfig> for NearestFinder {
    fn from(config: &SearchConfig) -> Self {
        let finder = Self::new().with_strategy(config.strategy);
        match config.workers {
            Some(workers) => finder.with_workers(workers),
            None => finder,
        }
    }
}

/// Find the element of `coords` closest to `target` using all CPUs
///
/// Fails with `SearchError::InvalidArgument` on an empty collection rather than
/// returning a zero coordinate.
pub fn find_nearest(target: &Coordinate, coords: &[Coordinate]) -> Result<SearchResult, SearchError> {
    NearestFinder::new().find(target, coords)
}

/// Scan with one scoped thread per non-empty chunk
fn scan_static(
    target: &Coordinate,
    coords: &[Coordinate],
    workers: usize,
) -> Result<CandidateAggregator, SearchError> {
    dispatch_static(target, coords, chunk_ranges(coords.len(), workers))
}

/// Run one scoped thread per non-empty range and collect the chunk minimums
fn dispatch_static(
    target: &Coordinate,
    coords: &[Coordinate],
    ranges: Vec<Range<usize>>,
) -> Result<CandidateAggregator, SearchError> {
    let mut aggregator = CandidateAggregator::new();

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());

        for (chunk, range) in ranges.into_iter().enumerate() {
            let worker = ChunkWorker::new(chunk, range.clone());
            if range.is_empty() {
                // Nothing to scan; record the empty slot without a thread
                aggregator.add_chunk(worker.scan(target, coords));
                continue;
            }

            tracing::trace!(chunk, start = range.start, end = range.end, "Dispatching worker");
            handles.push((chunk, scope.spawn(move || worker.scan(target, coords))));
        }

        // Join every handle so a panicked worker is reported, not re-raised by the scope
        let mut panicked = None;
        for (chunk, handle) in handles {
            match handle.join() {
                Ok(minimum) => aggregator.add_chunk(minimum),
                Err(_) => {
                    panicked.get_or_insert(chunk);
                }
            }
        }

        match panicked {
            Some(chunk) => Err(SearchError::WorkerPanicked(chunk)),
            None => Ok(()),
        }
    })?;

    Ok(aggregator)
}

/// Scan `workers × STEAL_CHUNKS_PER_WORKER` chunks (at most one per candidate)
/// on a dedicated rayon pool
fn scan_work_stealing(
    target: &Coordinate,
    coords: &[Coordinate],
    workers: usize,
) -> Result<CandidateAggregator, SearchError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("nearport-worker-{}", i))
        .build()?;

    let chunks = workers
        .saturating_mul(STEAL_CHUNKS_PER_WORKER)
        .min(coords.len());
    let ranges = chunk_ranges(coords.len(), chunks);

    // Indexed collect keeps chunk order
    let minimums: Vec<ChunkMinimum> = pool.install(|| {
        ranges
            .into_par_iter()
            .enumerate()
            .map(|(chunk, range)| ChunkWorker::new(chunk, range).scan(target, coords))
            .collect()
    });

    let mut aggregator = CandidateAggregator::new();
    for minimum in minimums {
        aggregator.add_chunk(minimum);
    }

    Ok(aggregator)
}
