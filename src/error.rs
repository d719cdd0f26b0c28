//! Error types for pdfpeek.

use std::io;
use thiserror::Error;

/// Result type alias for pdfpeek operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating or reading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the document or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not carry a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header names a version we do not recognise.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The backend could not parse the document structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text extraction failed on a single page.
    #[error("Text extraction error on page {page}: {message}")]
    PageExtract { page: u32, message: String },

    /// The requested page does not exist in the document.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// The requested parsing backend is not compiled into this build.
    #[error("PDF backend '{name}' is not available. {hint}")]
    BackendUnavailable { name: String, hint: String },

    /// The backend name is not one we know about.
    #[error("Unknown PDF backend: {0}")]
    UnknownBackend(String),
}

impl Error {
    /// Whether this error means the parsing capability is missing.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Error::BackendUnavailable { .. })
    }
}

#[cfg(feature = "lopdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(feature = "pdf-extract")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::PdfParse(err.to_string())
    }
}
