//! Extraction runner.
//!
//! Ties resolution, backend loading and per-page extraction together and
//! reports how the run ended as an [`Outcome`].

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backend::{load_backend, PdfBackend};
use crate::config::{ExitPolicy, ExtractorConfig};
use crate::detect::sniff_path;
use crate::error::{Error, Result};
use crate::resolve::PathResolver;

/// Line closing the extracted content.
pub const END_MARKER: &str = "--- END PDF CONTENT ---";

/// Prefix written before each caught extraction error.
pub const ERROR_PREFIX: &str = "Error reading PDF: ";

/// Exit code for a run that printed every page.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the parsing backend is not compiled in.
pub const EXIT_BACKEND_UNAVAILABLE: i32 = 1;
/// Exit code when no candidate resolved to a file.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit code when opening or extracting the document failed.
pub const EXIT_EXTRACTION_FAILED: i32 = 3;

/// Line opening the extracted content.
pub fn start_marker(path: &Path) -> String {
    format!("--- START PDF CONTENT ({}) ---", path.display())
}

/// What was written for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Resolved document path
    pub path: PathBuf,
    /// Pages in the document (0 if it never opened)
    pub pages_total: usize,
    /// Pages whose text reached the output
    pub pages_emitted: usize,
}

impl ExtractionReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            pages_total: 0,
            pages_emitted: 0,
        }
    }

    /// Whether every page reached the output.
    pub fn is_complete(&self) -> bool {
        self.pages_emitted == self.pages_total
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every page was written between the markers.
    Extracted(ExtractionReport),
    /// No candidate resolved to a file.
    NotFound { file_name: String },
    /// Opening or extracting failed; `report` says how far output got.
    Failed {
        report: ExtractionReport,
        error: Error,
    },
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        match (policy, self) {
            (ExitPolicy::Legacy, _) => EXIT_SUCCESS,
            (ExitPolicy::Distinct, Outcome::Extracted(_)) => EXIT_SUCCESS,
            (ExitPolicy::Distinct, Outcome::NotFound { .. }) => EXIT_NOT_FOUND,
            (ExitPolicy::Distinct, Outcome::Failed { .. }) => EXIT_EXTRACTION_FAILED,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Extracted(_))
    }
}

/// Write the text of every page of `path` to `out`, bracketed by markers.
///
/// Each page is written followed by exactly one newline; trailing line
/// breaks returned by the backend are dropped.
///
/// Errors are not propagated: a failure to open the document or to extract
/// any page ends the run with [`Outcome::Failed`] and the report records how
/// many pages were already written. The end marker is only written when all
/// pages succeed.
pub fn extract_to<W: Write>(backend: &dyn PdfBackend, path: &Path, out: &mut W) -> Outcome {
    let mut report = ExtractionReport::new(path);
    match write_pages(backend, path, out, &mut report) {
        Ok(()) => Outcome::Extracted(report),
        Err(error) => {
            log::warn!(
                "Extraction of {} stopped after {}/{} pages: {}",
                path.display(),
                report.pages_emitted,
                report.pages_total,
                error
            );
            Outcome::Failed { report, error }
        }
    }
}

fn write_pages<W: Write>(
    backend: &dyn PdfBackend,
    path: &Path,
    out: &mut W,
    report: &mut ExtractionReport,
) -> Result<()> {
    let header = sniff_path(path)?;
    log::debug!("{} is {}", path.display(), header);

    let doc = backend.open(path)?;
    let pages = doc.page_numbers();
    report.pages_total = pages.len();
    log::info!(
        "Extracting {} pages from {} with {}",
        pages.len(),
        path.display(),
        backend.name()
    );

    writeln!(out, "{}", start_marker(path))?;
    for page in pages {
        let text = doc.page_text(page)?;
        // one newline per page, whatever the backend appended
        writeln!(out, "{}", text.trim_end_matches(['\r', '\n']))?;
        report.pages_emitted += 1;
    }
    writeln!(out, "{}", END_MARKER)?;
    out.flush()?;

    Ok(())
}

/// Runs one resolve-and-extract pass.
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Resolve the document, load the backend and print the page text.
    ///
    /// All user-facing lines go to `out`. Returns `Err` only when the backend
    /// is unavailable (after writing its install hint) or `out` itself cannot
    /// be written; every other failure is an [`Outcome`].
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        let resolved = PathResolver::new(&self.config.resolver).resolve(out)?;

        let backend = match load_backend(self.config.backend) {
            Ok(backend) => backend,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Err(e);
            }
        };

        let Some(resolved) = resolved else {
            let file_name = self.config.resolver.file_name.clone();
            writeln!(
                out,
                "{}no file named {} under {}",
                ERROR_PREFIX,
                file_name,
                self.config.resolver.search_root.display()
            )?;
            return Ok(Outcome::NotFound { file_name });
        };
        log::debug!("Resolved {:?} candidate {}", resolved.source, resolved.path.display());

        let outcome = extract_to(backend.as_ref(), &resolved.path, out);
        if let Outcome::Failed { ref error, .. } = outcome {
            writeln!(out, "{}{}", ERROR_PREFIX, error)?;
        }
        Ok(outcome)
    }
}
