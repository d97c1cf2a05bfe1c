//! nearport - nearest-airport search
//!
//! nearport finds the airport closest to a target coordinate by scanning a
//! static coordinate set in parallel. It is meant as the fallback for
//! radius-limited place lookups that come back empty.
//!
//! # Architecture
//!
//! - **Distance metric**: haversine great-circle distance in kilometers ([`geo`])
//! - **Parallel finder**: contiguous chunks scanned on one thread each, merged
//!   in chunk order for deterministic ties ([`search`], [`worker`])
//! - **Sources**: CSV and in-memory coordinate loading ([`source`])
//! - **Locator**: radius lookup with nearest-search fallback ([`locate`])
//!
//! # Example
//!
//! ```
//! use nearport::{find_nearest, Coordinate};
//!
//! let airports = [
//!     Coordinate::new(33.6407, -84.4277),
//!     Coordinate::new(40.6413, -73.7781),
//!     Coordinate::new(51.4700, -0.4543),
//! ];
//! let nearest = find_nearest(&Coordinate::new(33.6407, -84.4277), &airports)?;
//! assert_eq!(nearest.coordinate, airports[0]);
//! # Ok::<(), nearport::search::SearchError>(())
//! ```

pub mod config;
pub mod geo;
pub mod locate;
pub mod logging;
pub mod output;
pub mod search;
pub mod source;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use geo::Coordinate;
pub use search::{find_nearest, NearestFinder, SearchError, SearchResult};

/// Result type used throughout nearport
pub type Result<T> = anyhow::Result<T>;
