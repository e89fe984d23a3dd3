//! Error types for the roster-csv importer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Zero bytes, only whitespace, or a header with no data rows.
  #[error("the file is empty")]
  EmptyFile,

  #[error("line {line}: {field} is required")]
  MissingField { line: u64, field: &'static str },

  #[error("line {line}: invalid {field} value {value:?}: {reason}")]
  InvalidField {
    line:   u64,
    field:  &'static str,
    value:  String,
    reason: String,
  },

  #[error("malformed CSV: {0}")]
  Csv(#[from] csv::Error),
}

impl Error {
  /// `true` for [`Error::EmptyFile`]; every other variant is a parse failure.
  pub fn is_empty_file(&self) -> bool { matches!(self, Self::EmptyFile) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
