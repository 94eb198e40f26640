//! Loader for MNIST-style CSV files.
//!
//! Format:
//! - one sample per line: `label,v1,v2,...,vN`
//! - the label is a non-negative integer class index
//! - an optional header row is skipped (detected when the label cell of the
//!   first row is non-numeric); any other malformed row is an error
//! - blank lines are ignored
//!
//! Values are returned raw; normalization is a separate step.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::dataset::Dataset;
use crate::error::{NetError, Result};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the first `count` samples from the CSV file at `path`.
///
/// Rows beyond `count` are not read. A missing file is reported as
/// `SourceNotFound`; a file with fewer than `count` rows as `Truncated`, so a
/// partially filled dataset is never returned.
pub fn load_csv(path: impl AsRef<Path>, count: usize, input_size: usize) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => NetError::SourceNotFound { path: path.to_path_buf() },
        _ => NetError::Io { path: path.to_path_buf(), source: e },
    })?;
    let reader = BufReader::new(file);

    let mut data = Dataset::with_capacity(count);
    let mut seen_first_row = false;

    for (line_idx, line) in reader.lines().enumerate() {
        if data.len() == count {
            break;
        }
        let line = line.map_err(|e| NetError::Io { path: path.to_path_buf(), source: e })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !seen_first_row {
            seen_first_row = true;
            if is_header(line) {
                tracing::debug!(path = %path.display(), "skipping header row");
                continue;
            }
        }

        let (label, features) = parse_row(line, input_size, data.len())
            .map_err(|e| e.at(path, line_idx + 1))?;
        data.push(features, label);
    }

    if data.len() < count {
        return Err(NetError::Truncated {
            path: path.to_path_buf(),
            requested: count,
            found: data.len(),
        });
    }

    tracing::debug!(path = %path.display(), samples = data.len(), "loaded csv");
    Ok(data)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Row-level failure before the file path and line number are attached.
#[derive(Debug)]
enum RowError {
    Parse(String),
    Dimension { index: usize, expected: usize, actual: usize },
}

impl RowError {
    fn at(self, path: &Path, line: usize) -> NetError {
        match self {
            RowError::Parse(message) => NetError::Parse {
                path: path.to_path_buf(),
                line,
                message,
            },
            RowError::Dimension { index, expected, actual } => NetError::RowLength {
                path: path.to_path_buf(),
                line,
                index,
                expected,
                actual,
            },
        }
    }
}

/// Returns `true` if the row looks like a header (label cell non-numeric).
///
/// Only the label cell decides: a numeric label followed by a bad value is a
/// malformed sample, not a header.
fn is_header(line: &str) -> bool {
    let first = line.split(',').next().unwrap_or("").trim();
    !first.is_empty() && first.parse::<f64>().is_err()
}

fn parse_row(
    line: &str,
    input_size: usize,
    index: usize,
) -> std::result::Result<(usize, Vec<f64>), RowError> {
    let mut cells = line.split(',');

    let label_cell = cells.next().unwrap_or("").trim();
    let label = label_cell.parse::<usize>().map_err(|_| {
        RowError::Parse(format!("label '{}' is not a non-negative integer", label_cell))
    })?;

    let features = cells
        .map(|c| {
            let t = c.trim();
            t.parse::<f64>()
                .map_err(|_| RowError::Parse(format!("'{}' is not a valid number", t)))
        })
        .collect::<std::result::Result<Vec<f64>, RowError>>()?;

    if features.len() != input_size {
        return Err(RowError::Dimension {
            index,
            expected: input_size,
            actual: features.len(),
        });
    }

    Ok((label, features))
}
