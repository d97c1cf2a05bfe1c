//! CLI to Config conversion utilities

use crate::config::{cli, Config, DataConfig, OutputConfig, OutputFormat, RuntimeConfig, SearchConfig};
use crate::geo::Coordinate;
use crate::search::SearchStrategy;
use anyhow::{Context, Result};

/// Parse a coordinate string ("LAT,LON") into a validated coordinate
///
/// Accepts optional whitespace and surrounding parentheses.
///
/// # Examples
///
/// ```
/// use nearport::config::cli_convert::parse_coordinate;
///
/// let c = parse_coordinate("33.6407, -84.4277").unwrap();
/// assert_eq!((c.latitude, c.longitude), (33.6407, -84.4277));
/// assert!(parse_coordinate("(0,0)").is_ok());
/// assert!(parse_coordinate("91,0").is_err());
/// ```
pub fn parse_coordinate(s: &str) -> Result<Coordinate> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');

    let (lat_str, lon_str) = s
        .split_once(',')
        .with_context(|| format!("Invalid coordinate format (expected LAT,LON): {}", s))?;

    let lat: f64 = lat_str.trim().parse()
        .with_context(|| format!("Invalid latitude: {}", lat_str.trim()))?;
    let lon: f64 = lon_str.trim().parse()
        .with_context(|| format!("Invalid longitude: {}", lon_str.trim()))?;

    Coordinate::validated(lat, lon)
        .with_context(|| format!("Coordinate out of range: {}", s))
}

/// Parse a radius string (e.g., "50", "50km", "12.5 km") to kilometers
pub fn parse_radius_km(s: &str) -> Result<f64> {
    let s = s.trim().to_lowercase();
    let num_str = s.trim_end_matches("km").trim();

    let km: f64 = num_str.parse()
        .with_context(|| format!("Invalid radius format: {}", s))?;

    if !km.is_finite() || km <= 0.0 {
        anyhow::bail!("radius must be a positive number of kilometers, got {}", s);
    }

    Ok(km)
}

/// Convert the CLI strategy to the config strategy
pub fn convert_strategy(strategy: cli::Strategy) -> SearchStrategy {
    match strategy {
        cli::Strategy::Static => SearchStrategy::Static,
        cli::Strategy::WorkStealing => SearchStrategy::WorkStealing,
    }
}

/// Convert the CLI format to the config format
pub fn convert_format(format: cli::Format) -> OutputFormat {
    match format {
        cli::Format::Text => OutputFormat::Text,
        cli::Format::Json => OutputFormat::Json,
    }
}

/// Build a configuration from CLI arguments alone
pub fn config_from_cli(cli: &cli::Cli) -> Result<Config> {
    let path = cli.data.clone()
        .ok_or_else(|| anyhow::anyhow!("Data path required"))?;

    let radius_km = cli.radius.as_deref()
        .map(parse_radius_km)
        .transpose()?;

    Ok(Config {
        data: DataConfig {
            path,
            strict: cli.strict,
        },
        search: SearchConfig {
            workers: cli.workers,
            strategy: cli.strategy.map(convert_strategy).unwrap_or_default(),
            radius_km,
            nearest_only: cli.nearest_only,
        },
        output: OutputConfig {
            format: cli.format.map(convert_format).unwrap_or_default(),
            json_output: cli.json_output.clone(),
            show_chunks: cli.show_chunks,
        },
        runtime: RuntimeConfig {
            dry_run: cli.dry_run,
            debug: cli.debug,
        },
    })
}
