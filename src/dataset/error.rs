//! Dataset error types
//!
//! Errors raised while reading the survey file. Individual bad cells are not
//! errors; they are counted in the load report and the value is left empty.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file does not exist
    #[error("Dataset file not found: {0:?}")]
    NotFound(PathBuf),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not readable as CSV (bad header, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::NotFound(PathBuf::from("sleep.csv"));
        assert_eq!(err.to_string(), "Dataset file not found: \"sleep.csv\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
