//! CSV coordinate source
//!
//! Reads one coordinate per record: column 0 is latitude, column 1 is
//! longitude, both as decimal text. Extra columns are ignored and may hold
//! quoted names with embedded commas or newlines.
//!
//! - Fields are trimmed, and stray quotes around a number are stripped
//! - Blank lines and lines starting with `#` are skipped
//! - Records that do not parse, are non-finite, or fall outside the valid
//!   latitude/longitude range are skipped with a warning (this covers a
//!   header row), or rejected in strict mode

use super::{CoordinateSource, SourceError};
use crate::geo::Coordinate;
use ::csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Coordinate source reading a CSV file
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    strict: bool,
}

impl CsvSource {
    /// Create a lenient source for `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            strict: false,
        }
    }

    /// Fail on the first malformed row instead of skipping it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse coordinates from any reader
    ///
    /// # Examples
    ///
    /// ```
    /// use nearport::source::CsvSource;
    ///
    /// let data = "latitude,longitude,name\n33.6407,-84.4277,\"Atlanta, GA\"\n40.6413,-73.7781,JFK\n";
    /// let coords = CsvSource::parse_reader(data.as_bytes(), false)?;
    /// assert_eq!(coords.len(), 2);
    /// assert_eq!(coords[1].longitude, -73.7781);
    /// # Ok::<(), nearport::source::SourceError>(())
    /// ```
    pub fn parse_reader<R: Read>(reader: R, strict: bool) -> Result<Vec<Coordinate>, SourceError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut coords = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let (line, parsed) = match result {
                Ok(record) => {
                    if record.iter().all(str::is_empty) {
                        continue;
                    }
                    (record_line(record.position()), parse_record(&record))
                }
                Err(err) => {
                    let line = record_line(err.position());
                    match err.into_kind() {
                        ::csv::ErrorKind::Io(e) => return Err(SourceError::Io(e)),
                        kind => (line, Err(describe_error(kind))),
                    }
                }
            };

            match parsed {
                Ok(coord) => coords.push(coord),
                Err(message) if strict => {
                    return Err(SourceError::Malformed { line, message });
                }
                Err(message) => {
                    skipped += 1;
                    tracing::warn!(line, "Skipping row: {}", message);
                }
            }
        }

        if skipped > 0 {
            tracing::info!(loaded = coords.len(), skipped, "Skipped malformed coordinate rows");
        }

        Ok(coords)
    }
}

impl CoordinateSource for CsvSource {
    fn load(&self) -> Result<Vec<Coordinate>, SourceError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(self.path.clone()),
            _ => SourceError::Io(e),
        })?;
        let coords = Self::parse_reader(file, self.strict)?;

        tracing::info!(
            path = %self.path.display(),
            count = coords.len(),
            "Loaded coordinates"
        );

        Ok(coords)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 1-based line a record starts on, 0 when the reader did not report one
fn record_line(position: Option<&::csv::Position>) -> usize {
    position.map_or(0, |p| p.line() as usize)
}

/// Parse one `lat,lon[,...]` record
fn parse_record(record: &StringRecord) -> Result<Coordinate, String> {
    let lat = parse_field(record.get(0), "latitude")?;
    let lon = parse_field(record.get(1), "longitude")?;

    Coordinate::validated(lat, lon).map_err(|e| e.to_string())
}

fn parse_field(field: Option<&str>, name: &str) -> Result<f64, String> {
    let raw = field.ok_or_else(|| format!("missing {} column", name))?;
    let text = raw.trim_matches('"').trim();
    text.parse::<f64>()
        .map_err(|_| format!("invalid {} '{}'", name, text))
}

fn describe_error(kind: ::csv::ErrorKind) -> String {
    match kind {
        ::csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8 in field {}", err.field()),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_plain_rows() {
        let data = "33.6407,-84.4277\n40.6413,-73.7781\n51.4700,-0.4543\n";
        let coords = CsvSource::parse_reader(data.as_bytes(), false).unwrap();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(33.6407, -84.4277),
                Coordinate::new(40.6413, -73.7781),
                Coordinate::new(51.4700, -0.4543),
            ]
        );
    }

    #[test]
    fn test_header_and_garbage_skipped() {
        let data = "lat,lon\n\n# comment\n33.6407,-84.4277\nabc,1.0\n95.0,10.0\n12.5\n1.0,2.0,KATL,extra\n";
        let coords = CsvSource::parse_reader(data.as_bytes(), false).unwrap();
        assert_eq!(
            coords,
            vec![Coordinate::new(33.6407, -84.4277), Coordinate::new(1.0, 2.0)]
        );
    }

    #[test]
    fn test_nan_rows_skipped() {
        let data = "NaN,1.0\n1.0,inf\n2.0,3.0\n";
        let coords = CsvSource::parse_reader(data.as_bytes(), false).unwrap();
        assert_eq!(coords, vec![Coordinate::new(2.0, 3.0)]);
    }

    #[test]
    fn test_strict_mode_reports_line() {
        let data = "33.6407,-84.4277\nnot,a-number\n";
        let err = CsvSource::parse_reader(data.as_bytes(), true).unwrap_err();
        match err {
            SourceError::Malformed { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("latitude"), "{}", message);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "latitude,longitude").unwrap();
        writeln!(file, "33.6407,-84.4277").unwrap();
        writeln!(file, " \"35.5523\" , \"139.7798\" ").unwrap();
        file.flush().unwrap();

        let source = CsvSource::new(file.path());
        let coords = source.load().unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1], Coordinate::new(35.5523, 139.7798));
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_strict_file_rejects_header() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "latitude,longitude").unwrap();
        writeln!(file, "33.6407,-84.4277").unwrap();
        file.flush().unwrap();

        let result = CsvSource::new(file.path()).strict(true).load();
        assert!(matches!(result, Err(SourceError::Malformed { line: 1, .. })));
    }

    #[test]
    fn test_quoted_fields_with_separators() {
        let data = "33.6407,-84.4277,\"Hartsfield\nJackson\"\n40.6413,-73.7781,\"Kennedy, NY\"\n51.4700,-0.4543,LHR\n";

        for strict in [false, true] {
            let coords = CsvSource::parse_reader(data.as_bytes(), strict).unwrap();
            assert_eq!(
                coords,
                vec![
                    Coordinate::new(33.6407, -84.4277),
                    Coordinate::new(40.6413, -73.7781),
                    Coordinate::new(51.4700, -0.4543),
                ],
                "strict={}",
                strict
            );
        }
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CsvSource::new(dir.path()).load();
        assert!(!matches!(result, Err(SourceError::NotFound(_))), "{:?}", result);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = CsvSource::new("/nonexistent/airports.csv").load();
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }
}
