use std::io;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::{Sample, TimingDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("CSV row {row}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: missing field {column}")]
    MissingField { row: usize, column: usize },

    #[error("row {row}, field {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a timing file from disk.
///
/// Layout: no header, `;` separated, first field is the frame index and the
/// second the time in milliseconds. Extra fields are ignored.
pub fn load_file(path: &Path) -> Result<TimingDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&text)
}

/// Same as [`load_file`] but from the file contents.
///
/// Empty and whitespace-only lines are skipped. Row numbers in errors are
/// 1-based line numbers of `text`.
pub fn parse_dataset(text: &str) -> Result<TimingDataset, LoadError> {
    let mut reader = builder().from_reader(text.as_bytes());
    let mut samples = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            row: line_of(text, source.position()).unwrap_or(idx + 1),
            source,
        })?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let row = line_of(text, record.position()).unwrap_or(idx + 1);

        let frame = parse_field(&record, row, 0)?;
        let time_ms = parse_field(&record, row, 1)?;
        samples.push(Sample { frame, time_ms });
    }

    Ok(TimingDataset::from_samples(samples))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    // The profiler export writes "i; value", so fields are trimmed.
    b.delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All);
    b
}

/// Line on which the record at `pos` starts.
///
/// The reader stamps a record with the position where reading began, which is
/// before any empty lines it skipped, so those terminators are counted here.
fn line_of(text: &str, pos: Option<&Position>) -> Option<usize> {
    let pos = pos?;
    let rest = text.as_bytes().get(pos.byte() as usize..).unwrap_or(&[]);
    let skipped = rest
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    Some(pos.line() as usize + skipped)
}

fn parse_field(record: &StringRecord, row: usize, column: usize) -> Result<f64, LoadError> {
    let tok = record
        .get(column)
        .filter(|t| !t.is_empty())
        .ok_or(LoadError::MissingField {
            row,
            column: column + 1,
        })?;

    tok.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column: column + 1,
        value: tok.to_string(),
    })
}
