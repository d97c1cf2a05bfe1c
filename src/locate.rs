//! Radius lookup with nearest-airport fallback
//!
//! Places services typically only answer within a fixed radius of the query
//! point (about 50 km). When that lookup comes back empty, the locator falls
//! back to a full nearest search over the whole coordinate collection, so a
//! caller always gets an answer for a non-empty collection.
//!
//! The radius lookup is a trait so a remote service can stand in for the
//! in-memory [`RadiusLookup`] used by the CLI.
//!
//! # Example
//!
//! ```
//! use nearport::geo::Coordinate;
//! use nearport::locate::{Located, Locator, RadiusLookup};
//! use nearport::search::NearestFinder;
//!
//! let airports = vec![
//!     Coordinate::new(33.6407, -84.4277), // ATL
//!     Coordinate::new(40.6413, -73.7781), // JFK
//! ];
//! let lookup = RadiusLookup::new(&airports);
//! let locator = Locator::new(&lookup, &airports, NearestFinder::new());
//!
//! // Middle of the Atlantic: nothing within 50 km, fall back to the nearest
//! match locator.locate(&Coordinate::new(35.0, -40.0), 50.0)? {
//!     Located::Fallback(report) => assert_eq!(report.result.index, 1),
//!     Located::WithinRadius(_) => unreachable!(),
//! }
//! # Ok::<(), nearport::search::SearchError>(())
//! ```

use crate::geo::Coordinate;
use crate::search::{NearestFinder, SearchError, SearchReport, SearchResult};

/// Radius limit of a typical nearby-places lookup, in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Radius-limited lookup of nearby coordinates
pub trait NearbyLookup {
    /// Candidates within `radius_km` of `target`, closest first
    fn nearby(&self, target: &Coordinate, radius_km: f64) -> Result<Vec<SearchResult>, SearchError>;
}

/// In-memory radius lookup over a coordinate slice
#[derive(Debug, Clone, Copy)]
pub struct RadiusLookup<'a> {
    coords: &'a [Coordinate],
}

impl<'a> RadiusLookup<'a> {
    pub fn new(coords: &'a [Coordinate]) -> Self {
        Self { coords }
    }
}

impl NearbyLookup for RadiusLookup<'_> {
    fn nearby(&self, target: &Coordinate, radius_km: f64) -> Result<Vec<SearchResult>, SearchError> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(SearchError::InvalidArgument(format!(
                "radius must be a non-negative number of kilometers, got {}",
                radius_km
            )));
        }
        target
            .validate()
            .map_err(|e| SearchError::InvalidArgument(format!("target {}: {}", target, e)))?;

        let mut hits: Vec<SearchResult> = self
            .coords
            .iter()
            .enumerate()
            .filter_map(|(index, coord)| {
                let distance_km = target.distance_km(coord);
                (distance_km <= radius_km).then_some(SearchResult {
                    coordinate: *coord,
                    distance_km,
                    index,
                })
            })
            .collect();

        // Stable sort keeps collection order for equal distances
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(hits)
    }
}

/// Outcome of a locate call
#[derive(Debug, Clone)]
pub enum Located {
    /// The radius lookup found candidates, closest first
    WithinRadius(Vec<SearchResult>),
    /// Nothing within the radius; the global nearest instead
    Fallback(SearchReport),
}

impl Located {
    /// The single closest candidate, whichever path produced it
    pub fn closest(&self) -> Option<&SearchResult> {
        match self {
            Located::WithinRadius(hits) => hits.first(),
            Located::Fallback(report) => Some(&report.result),
        }
    }
}

/// Radius lookup first, nearest search second
pub struct Locator<'a, L: NearbyLookup> {
    lookup: &'a L,
    coords: &'a [Coordinate],
    finder: NearestFinder,
}

impl<'a, L: NearbyLookup> Locator<'a, L> {
    pub fn new(lookup: &'a L, coords: &'a [Coordinate], finder: NearestFinder) -> Self {
        Self {
            lookup,
            coords,
            finder,
        }
    }

    /// Locate airports near `target`
    ///
    /// Lookup errors are returned unchanged; no retry is attempted.
    pub fn locate(&self, target: &Coordinate, radius_km: f64) -> Result<Located, SearchError> {
        let hits = self.lookup.nearby(target, radius_km)?;
        if !hits.is_empty() {
            tracing::debug!(count = hits.len(), radius_km, "Found candidates within radius");
            return Ok(Located::WithinRadius(hits));
        }

        tracing::info!(radius_km, "Nothing within radius, searching for nearest");
        self.finder.search(target, self.coords).map(Located::Fallback)
    }
}
