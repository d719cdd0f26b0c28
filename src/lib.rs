//! # pdfpeek
//!
//! Locate a single PDF through a chain of candidate paths and print the text
//! of every page.
//!
//! Candidates are tried in order: an absolute path, a bare file name in the
//! working directory, then a search of a directory tree. The document is
//! read through a pluggable parsing backend (`lopdf` by default).
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpeek::{Extractor, ExtractorConfig, ResolverConfig};
//!
//! fn main() -> pdfpeek::Result<()> {
//!     let resolver = ResolverConfig::new()
//!         .with_document_path("/srv/scans/invoice.pdf")
//!         .with_file_name("invoice.pdf")
//!         .with_search_root("/srv/scans");
//!     let extractor = Extractor::new(ExtractorConfig::new().with_resolver(resolver));
//!
//!     let stdout = std::io::stdout();
//!     let outcome = extractor.run(&mut stdout.lock())?;
//!     std::process::exit(outcome.exit_code(extractor.config().exit_policy));
//! }
//! ```

pub mod backend;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod resolve;

// Re-export commonly used types
pub use backend::{available_backends, load_backend, BackendKind, PdfBackend, PdfDocument};
pub use config::{ExitPolicy, ExtractorConfig, ResolverConfig};
pub use detect::{is_pdf, sniff_bytes, sniff_path, PdfHeader};
pub use error::{Error, Result};
pub use extract::{extract_to, start_marker, ExtractionReport, Extractor, Outcome, END_MARKER};
pub use resolve::{search_tree, CandidateSource, PathResolver, Resolved};

use std::path::Path;

/// Extract the text of every page of a PDF, in document order.
///
/// Uses the default backend. Errors from opening the file or from any page
/// are returned as-is.
///
/// # Example
///
/// ```no_run
/// let pages = pdfpeek::extract_pages("document.pdf").unwrap();
/// println!("{} pages", pages.len());
/// ```
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    sniff_path(path)?;
    let backend = load_backend(BackendKind::default())?;
    let doc = backend.open(path)?;
    doc.page_numbers()
        .into_iter()
        .map(|page| doc.page_text(page))
        .collect()
}

/// Resolve a document using the given anchors, without printing anything.
pub fn resolve(config: &ResolverConfig) -> Option<Resolved> {
    PathResolver::new(config).resolve(&mut std::io::sink()).ok().flatten()
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
