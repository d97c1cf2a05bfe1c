//! JSON output formatting
//!
//! Serializes search outcomes into a single report document:
//! - Target coordinate and data source
//! - Mode (`nearest`, `radius`, or `fallback`)
//! - The nearest coordinate and/or every hit within the radius
//! - Search statistics, with per-chunk detail (optional)

use crate::geo::Coordinate;
use crate::locate::Located;
use crate::search::{SearchReport, SearchResult};
use crate::util::time::format_elapsed;
use crate::worker::ChunkMinimum;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = d.as_micros() as u64;
        let human = format_elapsed(d);
        Self { micros, human }
    }
}

/// How the reported result was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    /// Plain nearest search
    Nearest,
    /// Radius lookup found candidates
    Radius,
    /// Radius lookup was empty, nearest search used instead
    Fallback,
}

/// Search statistics
#[derive(Debug, Clone, Serialize)]
pub struct JsonSearch {
    pub workers: usize,
    pub strategy: String,
    pub scanned: usize,
    pub elapsed: JsonDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<ChunkMinimum>>,
}

impl JsonSearch {
    fn from_report(report: &SearchReport, show_chunks: bool) -> Self {
        Self {
            workers: report.workers,
            strategy: report.strategy.to_string(),
            scanned: report.scanned,
            elapsed: JsonDuration::from_duration(report.elapsed),
            chunks: show_chunks.then(|| report.chunks.clone()),
        }
    }
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// RFC 3339 time the report was built
    pub timestamp: String,
    pub source: String,
    pub target: Coordinate,
    pub mode: JsonMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest: Option<SearchResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub within_radius: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<JsonSearch>,
}

impl JsonReport {
    /// Build a report for a plain nearest search
    pub fn from_search(source: &str, target: &Coordinate, report: &SearchReport, show_chunks: bool) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: source.to_string(),
            target: *target,
            mode: JsonMode::Nearest,
            radius_km: None,
            nearest: Some(report.result),
            within_radius: Vec::new(),
            search: Some(JsonSearch::from_report(report, show_chunks)),
        }
    }

    /// Build a report for a radius lookup with fallback
    pub fn from_located(
        source: &str,
        target: &Coordinate,
        radius_km: f64,
        located: &Located,
        show_chunks: bool,
    ) -> Self {
        match located {
            Located::WithinRadius(hits) => Self {
                timestamp: chrono::Utc::now().to_rfc3339(),
                source: source.to_string(),
                target: *target,
                mode: JsonMode::Radius,
                radius_km: Some(radius_km),
                nearest: hits.first().copied(),
                within_radius: hits.clone(),
                search: None,
            },
            Located::Fallback(report) => Self {
                mode: JsonMode::Fallback,
                radius_km: Some(radius_km),
                ..Self::from_search(source, target, report, show_chunks)
            },
        }
    }

    /// Serialize to a pretty-printed string
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize JSON report")
    }
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.flush()?;

    Ok(())
}
