//! Configuration validation

use super::*;
use anyhow::Result;

/// Worker count above which a warning is logged
const MAX_SENSIBLE_WORKERS: usize = 1024;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_data(&config.data)?;
    validate_search(&config.search)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate data configuration
pub fn validate_data(data: &DataConfig) -> Result<()> {
    if data.path.as_os_str().is_empty() {
        anyhow::bail!("data path must not be empty");
    }

    if data.path.is_dir() {
        anyhow::bail!("data path {} is a directory, expected a CSV file", data.path.display());
    }

    Ok(())
}

/// Validate search configuration
pub fn validate_search(search: &SearchConfig) -> Result<()> {
    if let Some(workers) = search.workers {
        if workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }

        let cpus = crate::worker::available_workers();
        if workers > MAX_SENSIBLE_WORKERS {
            tracing::warn!(workers, "Worker count is very large; each worker is a thread");
        } else if workers > cpus {
            tracing::warn!(workers, cpus, "More workers than CPU cores");
        }
    }

    if let Some(radius) = search.radius_km {
        if !radius.is_finite() || radius <= 0.0 {
            anyhow::bail!("radius_km must be a positive number, got {}", radius);
        }
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.is_dir() {
            anyhow::bail!("json_output {} is a directory", path.display());
        }
    }

    Ok(())
}
