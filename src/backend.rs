//! PDF backend abstraction layer.
//!
//! The parsing capability is delegated to a third-party PDF library chosen
//! at build time through cargo features. Callers only see [`PdfBackend`] and
//! [`PdfDocument`]; which libraries are compiled in is decided by
//! [`load_backend`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A loaded parsing capability.
pub trait PdfBackend {
    /// Short backend name, as accepted by [`BackendKind::from_str`].
    fn name(&self) -> &'static str;

    /// Open a document. The returned handle is owned by the caller.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>>;
}

/// An opened document.
pub trait PdfDocument {
    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extract the text of a single page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Number of pages.
    fn page_count(&self) -> usize {
        self.page_numbers().len()
    }
}

/// The parsing backends this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// `lopdf` (default feature)
    #[default]
    Lopdf,
    /// `pdf-extract` (optional feature)
    PdfExtract,
}

impl BackendKind {
    /// Every known backend, compiled in or not.
    pub const ALL: [BackendKind; 2] = [BackendKind::Lopdf, BackendKind::PdfExtract];

    /// Name of the backend and of the cargo feature enabling it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Lopdf => "lopdf",
            BackendKind::PdfExtract => "pdf-extract",
        }
    }

    /// Whether this build carries the backend.
    pub fn is_compiled(&self) -> bool {
        match self {
            BackendKind::Lopdf => cfg!(feature = "lopdf"),
            BackendKind::PdfExtract => cfg!(feature = "pdf-extract"),
        }
    }

    /// Instruction printed when the backend is missing.
    pub fn install_hint(&self) -> String {
        format!(
            "Please rebuild with: cargo install pdfpeek-cli --features {}",
            self.as_str()
        )
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lopdf" => Ok(BackendKind::Lopdf),
            "pdf-extract" | "pdf_extract" => Ok(BackendKind::PdfExtract),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

/// Backends compiled into this build.
pub fn available_backends() -> Vec<BackendKind> {
    BackendKind::ALL
        .into_iter()
        .filter(BackendKind::is_compiled)
        .collect()
}

/// Acquire the requested parsing capability.
///
/// Fails with [`Error::BackendUnavailable`] when the backend's feature was
/// not enabled at build time.
pub fn load_backend(kind: BackendKind) -> Result<Box<dyn PdfBackend>> {
    match kind {
        #[cfg(feature = "lopdf")]
        BackendKind::Lopdf => Ok(Box::new(LopdfBackend)),
        #[cfg(feature = "pdf-extract")]
        BackendKind::PdfExtract => Ok(Box::new(PdfExtractBackend)),
        #[allow(unreachable_patterns)]
        missing => Err(Error::BackendUnavailable {
            name: missing.as_str().to_string(),
            hint: missing.install_hint(),
        }),
    }
}

// ---------------------------------------------------------------------------
// LopdfBackend
// ---------------------------------------------------------------------------

#[cfg(feature = "lopdf")]
pub use self::lopdf_backend::{LopdfBackend, LopdfDocument};

#[cfg(feature = "lopdf")]
mod lopdf_backend {
    use std::path::Path;

    use super::{PdfBackend, PdfDocument};
    use crate::error::{Error, Result};

    /// [`PdfBackend`] backed by `lopdf`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LopdfBackend;

    /// A document loaded by `lopdf`.
    pub struct LopdfDocument {
        doc: lopdf::Document,
        /// Page numbers in document order, read once at load time
        pages: Vec<u32>,
    }

    impl LopdfDocument {
        /// Load from a file path.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
            let doc = lopdf::Document::load(path)?;

            if doc.is_encrypted() {
                log::warn!("Document is encrypted; extracted text may be empty");
            }
            let pages = doc.get_pages().into_keys().collect();
            Ok(Self { doc, pages })
        }

        /// PDF version declared by the document.
        pub fn version(&self) -> &str {
            &self.doc.version
        }
    }

    impl PdfBackend for LopdfBackend {
        fn name(&self) -> &'static str {
            "lopdf"
        }

        fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>> {
            let doc = LopdfDocument::load(path)?;
            log::debug!("lopdf loaded PDF {} from {}", doc.version(), path.display());
            Ok(Box::new(doc))
        }
    }

    impl PdfDocument for LopdfDocument {
        fn page_numbers(&self) -> Vec<u32> {
            self.pages.clone()
        }

        fn page_text(&self, page: u32) -> Result<String> {
            if self.pages.binary_search(&page).is_err() {
                return Err(Error::PageOutOfRange(page, self.pages.len() as u32));
            }
            self.doc
                .extract_text(&[page])
                .map_err(|e| Error::PageExtract {
                    page,
                    message: e.to_string(),
                })
        }
    }
}

// ---------------------------------------------------------------------------
// PdfExtractBackend
// ---------------------------------------------------------------------------

#[cfg(feature = "pdf-extract")]
pub use self::pdf_extract_backend::PdfExtractBackend;

#[cfg(feature = "pdf-extract")]
mod pdf_extract_backend {
    use std::path::Path;

    use super::{PdfBackend, PdfDocument};
    use crate::error::{Error, Result};

    /// [`PdfBackend`] backed by `pdf-extract`.
    ///
    /// `pdf-extract` works on whole documents, so all pages are extracted
    /// when the document is opened.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct PdfExtractBackend;

    struct ExtractedPages {
        pages: Vec<String>,
    }

    impl PdfBackend for PdfExtractBackend {
        fn name(&self) -> &'static str {
            "pdf-extract"
        }

        fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>> {
            let pages = pdf_extract::extract_text_by_pages(path)?;
            log::debug!("pdf-extract read {} pages from {}", pages.len(), path.display());
            Ok(Box::new(ExtractedPages { pages }))
        }
    }

    impl PdfDocument for ExtractedPages {
        fn page_numbers(&self) -> Vec<u32> {
            (1..=self.pages.len() as u32).collect()
        }

        fn page_text(&self, page: u32) -> Result<String> {
            page.checked_sub(1)
                .and_then(|index| self.pages.get(index as usize))
                .cloned()
                .ok_or(Error::PageOutOfRange(page, self.pages.len() as u32))
        }
    }
}
