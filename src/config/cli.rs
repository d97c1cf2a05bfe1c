//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// One thread per contiguous chunk (default)
    Static,
    /// Smaller chunks on a work-stealing pool
    WorkStealing,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable summary
    Text,
    /// JSON report
    Json,
}

/// nearport - find the nearest airport to a coordinate
#[derive(Parser, Debug)]
#[command(name = "nearport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target coordinate as "LAT,LON" (e.g., "33.6407,-84.4277")
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// CSV file of airport coordinates (latitude,longitude per row)
    #[arg(short = 'd', long, env = "NEARPORT_DATA")]
    pub data: Option<PathBuf>,

    /// TOML configuration file (CLI options take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Search Options ===
    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Chunk dispatch strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Report every airport within this radius first (default: 50km)
    #[arg(short = 'r', long, visible_alias = "radius-km")]
    pub radius: Option<String>,

    /// Skip the radius lookup and report only the nearest airport
    #[arg(long, conflicts_with = "radius")]
    pub nearest_only: bool,

    /// Fail on malformed CSV rows instead of skipping them
    #[arg(long)]
    pub strict: bool,

    // === Output Options ===
    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<Format>,

    /// Also write the JSON report to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Show per-chunk minimums
    #[arg(long)]
    pub show_chunks: bool,

    // === Runtime Options ===
    /// Validate configuration and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.target.is_none() && !self.dry_run {
            anyhow::bail!("--target is required (e.g., --target 33.6407,-84.4277)");
        }

        if self.data.is_none() && self.config.is_none() {
            anyhow::bail!("either --data or --config must be provided");
        }

        if self.workers == Some(0) {
            anyhow::bail!("workers must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_target() {
        let cli = Cli::try_parse_from([
            "nearport",
            "--target",
            "-33.9461,151.1772",
            "--data",
            "airports.csv",
        ])
        .unwrap();
        assert_eq!(cli.target.as_deref(), Some("-33.9461,151.1772"));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_search_options() {
        let cli = Cli::try_parse_from([
            "nearport",
            "-t",
            "0,0",
            "-d",
            "airports.csv",
            "-w",
            "4",
            "--strategy",
            "work-stealing",
            "--format",
            "json",
            "--radius",
            "50km",
        ])
        .unwrap();
        assert_eq!(cli.workers, Some(4));
        assert_eq!(cli.strategy, Some(Strategy::WorkStealing));
        assert_eq!(cli.format, Some(Format::Json));
        assert_eq!(cli.radius.as_deref(), Some("50km"));
    }

    #[test]
    fn test_nearest_only_conflicts_with_radius() {
        let cli = Cli::try_parse_from(["nearport", "-t", "0,0", "-d", "a.csv", "--nearest-only"]).unwrap();
        assert!(cli.nearest_only);

        let cli = Cli::try_parse_from(["nearport", "-t", "0,0", "-d", "a.csv", "--radius-km", "20"]).unwrap();
        assert_eq!(cli.radius.as_deref(), Some("20"));

        let result = Cli::try_parse_from([
            "nearport", "-t", "0,0", "-d", "a.csv", "--nearest-only", "-r", "20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_target() {
        let cli = Cli::try_parse_from(["nearport", "--data", "airports.csv"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["nearport", "--data", "airports.csv", "--dry-run"]).unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let cli = Cli::try_parse_from(["nearport", "-t", "0,0", "-d", "a.csv", "-w", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
