//! Error types for the sheetview library.

use std::io;
use thiserror::Error;

/// Result type alias for sheetview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and rendering a spreadsheet.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The selected file could not be read.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// The read completed but produced no content.
    #[error("Failed to read file content")]
    EmptyFile,

    /// The file format could not be determined.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The file format is recognized but is not a spreadsheet.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// The workbook decoder rejected the content.
    #[error("Invalid spreadsheet: {0}")]
    Decode(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

/// Coarse classification of an [`Error`], matching the pipeline stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be acquired.
    Read,
    /// The buffer is not a usable spreadsheet.
    Decode,
    /// Output could not be produced.
    Render,
}

impl Error {
    /// Returns the pipeline stage this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Read(_) | Error::EmptyFile => ErrorKind::Read,
            Error::UnknownFormat
            | Error::UnsupportedFormat(_)
            | Error::ZipArchive(_)
            | Error::XmlParse(_)
            | Error::Decode(_) => ErrorKind::Decode,
            Error::Render(_) => ErrorKind::Render,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
