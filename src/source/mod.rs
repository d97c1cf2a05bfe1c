//! Coordinate sources
//!
//! A coordinate source supplies the collection the nearest search runs over.
//! The search itself never reads files; it only sees the `Vec<Coordinate>` a
//! source returns.
//!
//! # Sources
//!
//! - **CsvSource**: rows of `latitude,longitude` decimal text
//! - **MemorySource**: an in-memory list, mostly for tests and embedding
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//! use nearport::source::{CoordinateSource, MemorySource};
//!
//! let source = MemorySource::new(vec![Coordinate::new(33.6407, -84.4277)]);
//! let coords = source.load()?;
//! assert_eq!(coords.len(), 1);
//! # Ok::<(), nearport::source::SourceError>(())
//! ```

pub mod csv;

pub use self::csv::CsvSource;

use crate::geo::Coordinate;
use std::path::PathBuf;

/// Error type for coordinate loading
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("coordinate file not found: {0}")]
    NotFound(PathBuf),
    #[error("malformed row at line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplier of the coordinate collection
///
/// Implementations must be `Send + Sync` so a loaded source can be shared with
/// other threads.
pub trait CoordinateSource: Send + Sync {
    /// Load every coordinate, in source order
    fn load(&self) -> Result<Vec<Coordinate>, SourceError>;

    /// Short human-readable description (file path, "memory", ...)
    fn describe(&self) -> String;
}

/// Source backed by an in-memory list
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    coords: Vec<Coordinate>,
}

impl MemorySource {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }
}

impl CoordinateSource for MemorySource {
    fn load(&self) -> Result<Vec<Coordinate>, SourceError> {
        Ok(self.coords.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} coordinates)", self.coords.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_preserves_order() {
        let coords = vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::new(3.0, 4.0),
            Coordinate::new(1.0, 2.0),
        ];
        let source = MemorySource::new(coords.clone());
        assert_eq!(source.load().unwrap(), coords);
        assert_eq!(source.describe(), "memory (3 coordinates)");
    }

    #[test]
    fn test_source_is_object_safe() {
        let source: Box<dyn CoordinateSource> = Box::new(MemorySource::default());
        assert!(source.load().unwrap().is_empty());
    }
}
