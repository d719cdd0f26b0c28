//! PDF header sniffing.
//!
//! The `%PDF-x.y` marker must open the file. Backends refuse documents with
//! bytes ahead of the header, so such files are rejected here as
//! [`Error::UnknownFormat`] before any backend sees them.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header information found at the start of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;
const HEADER_LEN: usize = PDF_MAGIC.len() + VERSION_LEN;

/// Sniff the PDF header of a file on disk.
///
/// Only the first few bytes are read; short files are fine.
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    sniff_bytes(&header)
}

/// Sniff the PDF header from the leading bytes of a document.
pub fn sniff_bytes(data: &[u8]) -> Result<PdfHeader> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..HEADER_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(version_bytes) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfHeader { version })
}

fn is_valid_version(bytes: &[u8]) -> bool {
    matches!(bytes, [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// Check whether a file looks like a PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    sniff_path(path).is_ok()
}
