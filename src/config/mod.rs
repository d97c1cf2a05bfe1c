//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::locate::DEFAULT_RADIUS_KM;
use crate::search::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Coordinate data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file with one `latitude,longitude` row per airport
    pub path: PathBuf,
    /// Fail on malformed rows instead of skipping them
    #[serde(default)]
    pub strict: bool,
}

/// Search configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of workers (defaults to the CPU count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    /// Chunk dispatch strategy
    #[serde(default)]
    pub strategy: SearchStrategy,
    /// Radius for the nearby lookup (defaults to `DEFAULT_RADIUS_KM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    /// Skip the radius lookup and report only the single nearest airport
    #[serde(default)]
    pub nearest_only: bool,
}

impl SearchConfig {
    /// Radius to look up before the nearest search, `None` when disabled
    pub fn lookup_radius_km(&self) -> Option<f64> {
        if self.nearest_only {
            None
        } else {
            Some(self.radius_km.unwrap_or(DEFAULT_RADIUS_KM))
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format printed to stdout
    #[serde(default)]
    pub format: OutputFormat,
    /// Also write the JSON report to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_output: Option<PathBuf>,
    /// Include per-chunk detail
    #[serde(default)]
    pub show_chunks: bool,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Validate configuration and exit without searching
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Data: {}", self.data)?;
        writeln!(f, "  Search: {}", self.search)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for DataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        if self.strict {
            write!(f, " (strict)")?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.workers {
            Some(n) => write!(f, "workers={}", n)?,
            None => write!(f, "workers=auto")?,
        }
        write!(f, ", strategy={}", self.strategy)?;
        match self.lookup_radius_km() {
            Some(radius) => write!(f, ", radius={}km", radius)?,
            None => write!(f, ", nearest-only")?,
        }
        Ok(())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}", self.format)?;
        if let Some(ref path) = self.json_output {
            write!(f, ", json={}", path.display())?;
        }
        if self.show_chunks {
            write!(f, ", show_chunks")?;
        }
        Ok(())
    }
}
