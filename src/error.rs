use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------
//
// Two families only. Loading is fatal: without the dataset there is nothing
// to show, so `main` prints the error and exits. Exporting is recoverable:
// the session keeps its state and the user may retry. Filtering has no error
// type at all; it is a pure projection over already-typed rows and cannot
// fail at runtime.

/// Startup failure while reading or parsing the dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("row {row}: column `{column}` has unusable value `{value}`")]
    BadCell {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset has a header but no rows")]
    Empty,
}

/// Failure while writing the filtered view to disk. Never fatal.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
