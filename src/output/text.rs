//! Human-readable text output

use crate::geo::Coordinate;
use crate::locate::Located;
use crate::search::{SearchReport, SearchResult};
use crate::util::time::{format_distance_km, format_elapsed, format_scan_rate};
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print a nearest-search report to stdout
pub fn print_report(target: &Coordinate, report: &SearchReport, show_chunks: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ignore_broken_pipe(write_report(&mut out, target, report, show_chunks))
}

/// Print the outcome of a radius lookup with fallback to stdout
pub fn print_located(
    target: &Coordinate,
    radius_km: f64,
    located: &Located,
    show_chunks: bool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ignore_broken_pipe(write_located(&mut out, target, radius_km, located, show_chunks))
}

/// A closed stdout (`nearport ... | head`) ends output quietly; other errors propagate
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Write a nearest-search report
///
/// Shows the closest coordinate, its distance, and the search statistics:
/// - Worker count and strategy
/// - Candidates scanned and scan rate
/// - Per-chunk minimums (if enabled)
pub fn write_report<W: Write>(
    out: &mut W,
    target: &Coordinate,
    report: &SearchReport,
    show_chunks: bool,
) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "                  NEAREST AIRPORT")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "Target:   {}", target)?;
    write_result(out, "Nearest:", &report.result)?;
    writeln!(out)?;

    writeln!(out, "Search:")?;
    writeln!(out, "  Workers:  {} ({})", report.workers, report.strategy)?;
    writeln!(out, "  Scanned:  {} candidates in {} ({})",
             format_number(report.scanned as u64),
             format_elapsed(report.elapsed),
             format_scan_rate(report.scanned, report.elapsed))?;

    if show_chunks {
        writeln!(out)?;
        writeln!(out, "Chunks:")?;
        for chunk in &report.chunks {
            match chunk.best {
                Some(ref best) => writeln!(
                    out,
                    "  #{:<3} [{}..{})  best #{} {} at {}",
                    chunk.chunk,
                    chunk.start,
                    chunk.end,
                    best.index,
                    best.coordinate,
                    format_distance_km(best.distance_km)
                )?,
                None => writeln!(out, "  #{:<3} [{}..{})  empty", chunk.chunk, chunk.start, chunk.end)?,
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// Write the outcome of a radius lookup with fallback
pub fn write_located<W: Write>(
    out: &mut W,
    target: &Coordinate,
    radius_km: f64,
    located: &Located,
    show_chunks: bool,
) -> io::Result<()> {
    match located {
        Located::WithinRadius(hits) => {
            writeln!(out, "{}", RULE)?;
            writeln!(out, "              AIRPORTS WITHIN {}", format_distance_km(radius_km))?;
            writeln!(out, "{}", RULE)?;
            writeln!(out)?;
            writeln!(out, "Target:   {}", target)?;
            writeln!(out, "Found:    {}", hits.len())?;
            writeln!(out)?;
            for (rank, hit) in hits.iter().enumerate() {
                write_result(out, &format!("  {:>3}.", rank + 1), hit)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", RULE)?;
            Ok(())
        }
        Located::Fallback(report) => {
            writeln!(out, "No airports within {}; showing the nearest.",
                     format_distance_km(radius_km))?;
            writeln!(out)?;
            write_report(out, target, report, show_chunks)
        }
    }
}

fn write_result<W: Write>(out: &mut W, label: &str, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "{} {} - {} (row #{})",
             label,
             result.coordinate,
             format_distance_km(result.distance_km),
             result.index)
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
