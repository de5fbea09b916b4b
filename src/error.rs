//! Error types for the docx-outline library.

use std::io;
use thiserror::Error;

/// Result type alias for docx-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required document part is missing from the archive.
    #[error("Missing part: {0}")]
    MissingPart(String),

    /// The file is not a Word document this crate can read.
    #[error("Not a Word document: {0}")]
    NotWordDocument(String),
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
