//! Search timing and distance formatting
//!
//! Used by the output layer to report how long a search took, how many
//! candidates per second the workers got through, and how far away a result is.

use std::time::Duration;

/// Unit steps for elapsed search time, smallest first
const ELAPSED_UNITS: [(u128, f64, &str); 3] = [
    (1_000_000, 1_000.0, "us"),
    (1_000_000_000, 1_000_000.0, "ms"),
    (u128::MAX, 1_000_000_000.0, "s"),
];

/// Unit steps for scan throughput, largest first
const RATE_UNITS: [(f64, &str); 3] = [
    (1_000_000_000.0, "G"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Format the wall time of a search
///
/// Scans of small collections finish in microseconds, so sub-microsecond
/// times keep whole nanoseconds and everything above gets two decimals.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nearport::util::time::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_nanos(640)), "640ns");
/// assert_eq!(format_elapsed(Duration::from_micros(85)), "85.00us");
/// assert_eq!(format_elapsed(Duration::from_micros(12_340)), "12.34ms");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < 1_000 {
        return format!("{}ns", nanos);
    }

    ELAPSED_UNITS
        .iter()
        .find(|(below, _, _)| nanos < *below)
        .map(|(_, divisor, unit)| format!("{:.2}{}", nanos as f64 / divisor, unit))
        .unwrap_or_else(|| format!("{:.2}s", elapsed.as_secs_f64()))
}

/// Candidates scanned per second, `None` when no time was measured
pub fn scan_rate(scanned: usize, elapsed: Duration) -> Option<f64> {
    let seconds = elapsed.as_secs_f64();
    (seconds > 0.0).then(|| scanned as f64 / seconds)
}

/// Format scan throughput as candidates per second
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use nearport::util::time::format_scan_rate;
///
/// assert_eq!(format_scan_rate(20, Duration::from_millis(40)), "500 candidates/s");
/// assert_eq!(format_scan_rate(10_000, Duration::from_micros(4_000)), "2.50M candidates/s");
/// assert_eq!(format_scan_rate(10, Duration::ZERO), "n/a");
/// ```
pub fn format_scan_rate(scanned: usize, elapsed: Duration) -> String {
    let rate = match scan_rate(scanned, elapsed) {
        Some(rate) => rate,
        None => return "n/a".to_string(),
    };

    match RATE_UNITS.iter().find(|(scale, _)| rate >= *scale) {
        Some((scale, unit)) => format!("{:.2}{} candidates/s", rate / scale, unit),
        None => format!("{:.0} candidates/s", rate),
    }
}

/// Format a distance in kilometers
///
/// Sub-kilometer distances are shown in meters.
pub fn format_distance_km(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.2} km", km)
    }
}
