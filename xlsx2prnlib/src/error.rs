//! Error types for xlsx2prnlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a workbook
#[derive(Error, Debug)]
pub enum PrnError {
    /// Input path does not exist or is not a regular file
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Input path does not carry an .xlsx extension
    #[error("not an .xlsx file: {0}")]
    NotXlsxFile(PathBuf),

    /// calamine could not open or parse the workbook container
    #[error("failed to open workbook '{path}': {source}")]
    WorkbookOpen {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// Workbook has no worksheet to convert
    #[error("workbook has no worksheets: {0}")]
    NoWorksheet(PathBuf),

    /// The first worksheet could not be read
    #[error("failed to read worksheet '{sheet}': {source}")]
    WorksheetRead {
        sheet: String,
        source: calamine::XlsxError,
    },

    /// The first worksheet has no used range
    #[error("worksheet '{sheet}' is empty in {path}")]
    EmptySheet { sheet: String, path: PathBuf },

    /// Failed to write an output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrnError {
    /// Whether this error comes from validating the input path rather than
    /// from reading the workbook or writing outputs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PrnError::PathNotFound(_) | PrnError::NotXlsxFile(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(PrnError::PathNotFound(PathBuf::from("a.xlsx")).is_invalid_input());
        assert!(PrnError::NotXlsxFile(PathBuf::from("a.txt")).is_invalid_input());
        assert!(!PrnError::NoWorksheet(PathBuf::from("a.xlsx")).is_invalid_input());
        assert!(!PrnError::EmptySheet {
            sheet: "Sheet1".to_string(),
            path: PathBuf::from("a.xlsx"),
        }
        .is_invalid_input());
    }

    #[test]
    fn test_file_write_message_includes_source() {
        let err = PrnError::FileWrite {
            path: PathBuf::from("/out/data.prn"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/out/data.prn"));
        assert!(message.contains("denied"));
    }
}
