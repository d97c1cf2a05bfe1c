//! TOML configuration file parsing
//!
//! Example file:
//!
//! ```toml
//! [data]
//! path = "data/airports.csv"
//! strict = false
//!
//! [search]
//! workers = 8
//! strategy = "work-stealing"
//! radius_km = 50.0
//! nearest_only = false
//!
//! [output]
//! format = "json"
//! show_chunks = true
//! ```

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{convert_format, convert_strategy, parse_radius_km};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Serialize a configuration back to TOML
pub fn to_toml_string(config: &Config) -> Result<String> {
    ::toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override data settings
    if let Some(ref path) = cli.data {
        config.data.path = path.clone();
    }
    if cli.strict {
        config.data.strict = true;
    }

    // Override search settings
    if let Some(workers) = cli.workers {
        config.search.workers = Some(workers);
    }
    if let Some(strategy) = cli.strategy {
        config.search.strategy = convert_strategy(strategy);
    }
    if let Some(ref radius) = cli.radius {
        config.search.radius_km = Some(parse_radius_km(radius)?);
        config.search.nearest_only = false;
    }
    if cli.nearest_only {
        config.search.nearest_only = true;
    }

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = convert_format(format);
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.show_chunks {
        config.output.show_chunks = true;
    }

    // Override runtime settings
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    const FULL: &str = r#"
[data]
path = "data/airports.csv"
strict = true

[search]
workers = 8
strategy = "work-stealing"
radius_km = 50.0

[output]
format = "json"
json_output = "report.json"
show_chunks = true
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_toml_string(FULL).unwrap();
        assert_eq!(config.data.path, PathBuf::from("data/airports.csv"));
        assert!(config.data.strict);
        assert_eq!(config.search.workers, Some(8));
        assert_eq!(config.search.strategy, SearchStrategy::WorkStealing);
        assert_eq!(config.search.radius_km, Some(50.0));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.json_output, Some(PathBuf::from("report.json")));
        assert!(config.output.show_chunks);
        assert!(!config.runtime.dry_run);
    }

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let config = parse_toml_string("[data]\npath = \"airports.csv\"\n").unwrap();
        assert!(!config.data.strict);
        assert_eq!(config.search.workers, None);
        assert_eq!(config.search.strategy, SearchStrategy::Static);
        assert_eq!(config.search.radius_km, None);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_rejects_unknown_strategy() {
        let toml = "[data]\npath = \"a.csv\"\n[search]\nstrategy = \"random\"\n";
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = parse_toml_string(FULL).unwrap();
        let text = to_toml_string(&config).unwrap();
        let again = parse_toml_string(&text).unwrap();
        assert_eq!(again.search.workers, config.search.workers);
        assert_eq!(again.search.strategy, config.search.strategy);
        assert_eq!(again.output.json_output, config.output.json_output);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.search.workers, Some(8));

        let err = parse_toml_file(Path::new("/nonexistent/nearport.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = parse_toml_string(FULL).unwrap();
        let cli = Cli::try_parse_from([
            "nearport", "-t", "0,0", "-c", "run.toml",
            "-d", "other.csv", "-w", "2", "--strategy", "static", "-f", "text", "-r", "10",
        ])
        .unwrap();

        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.data.path, PathBuf::from("other.csv"));
        assert!(merged.data.strict, "flags left unset keep the file value");
        assert_eq!(merged.search.workers, Some(2));
        assert_eq!(merged.search.strategy, SearchStrategy::Static);
        assert_eq!(merged.search.radius_km, Some(10.0));
        assert_eq!(merged.output.format, OutputFormat::Text);
        assert!(merged.output.show_chunks);
    }

    #[test]
    fn test_nearest_only_from_file_and_cli() {
        let toml = "[data]\npath = \"a.csv\"\n[search]\nnearest_only = true\n";
        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.search.lookup_radius_km(), None);

        // An explicit radius on the command line turns the lookup back on
        let cli = Cli::try_parse_from(["nearport", "-t", "0,0", "-c", "run.toml", "-r", "30km"]).unwrap();
        let merged = merge_cli_with_config(&cli, config).unwrap();
        assert_eq!(merged.search.lookup_radius_km(), Some(30.0));

        let cli = Cli::try_parse_from(["nearport", "-t", "0,0", "-c", "run.toml", "--nearest-only"]).unwrap();
        let merged = merge_cli_with_config(&cli, parse_toml_string(FULL).unwrap()).unwrap();
        assert_eq!(merged.search.lookup_radius_km(), None);
    }
}
