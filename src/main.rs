//! nearport CLI entry point

use anyhow::{Context, Result};
use nearport::config::cli::Cli;
use nearport::config::{cli_convert, toml, validator, Config, OutputFormat};
use nearport::geo::Coordinate;
use nearport::locate::{Locator, RadiusLookup};
use nearport::output::json::{write_json_output, JsonReport};
use nearport::output::text;
use nearport::search::NearestFinder;
use nearport::source::{CoordinateSource, CsvSource};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = build_config(&cli)?;
    nearport::logging::init_logging(config.runtime.debug)?;

    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    if config.runtime.dry_run {
        print!("{}", config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    // Validated above: target is present unless dry-run
    let target_str = cli.target.as_deref()
        .ok_or_else(|| anyhow::anyhow!("Target coordinate required"))?;
    let target = cli_convert::parse_coordinate(target_str)
        .context("Invalid target")?;

    run(&config, &target)
}

/// Build configuration from CLI arguments, merging a TOML file if given
fn build_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => {
            let config = toml::parse_toml_file(path)?;
            toml::merge_cli_with_config(cli, config)
        }
        None => cli_convert::config_from_cli(cli),
    }
}

/// Load coordinates, search, and print the outcome
fn run(config: &Config, target: &Coordinate) -> Result<()> {
    let source = CsvSource::new(&config.data.path).strict(config.data.strict);
    let coords = source.load()
        .with_context(|| format!("Failed to load coordinates from {}", source.describe()))?;

    let finder = NearestFinder::from(&config.search);
    tracing::debug!(
        point = %target,
        candidates = coords.len(),
        workers = finder.workers(),
        strategy = %finder.strategy(),
        "Starting search"
    );

    let show_chunks = config.output.show_chunks;
    let json = match config.search.lookup_radius_km() {
        Some(radius_km) => {
            let lookup = RadiusLookup::new(&coords);
            let located = Locator::new(&lookup, &coords, finder)
                .locate(target, radius_km)
                .context("Search failed")?;

            if config.output.format == OutputFormat::Text {
                text::print_located(target, radius_km, &located, show_chunks)
                    .context("Failed to write report")?;
            }
            JsonReport::from_located(&source.describe(), target, radius_km, &located, show_chunks)
        }
        None => {
            let report = finder.search(target, &coords)
                .context("Search failed")?;

            if config.output.format == OutputFormat::Text {
                text::print_report(target, &report, show_chunks)
                    .context("Failed to write report")?;
            }
            JsonReport::from_search(&source.describe(), target, &report, show_chunks)
        }
    };

    if config.output.format == OutputFormat::Json {
        println!("{}", json.to_json_string()?);
    }

    if let Some(ref path) = config.output.json_output {
        write_json_output(path, &json, true)?;
        tracing::info!(path = %path.display(), "Wrote JSON report");
    }

    Ok(())
}
