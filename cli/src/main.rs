//! pdfpeek CLI - locate a PDF and print its page text

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pdfpeek::config::{DEFAULT_DOCUMENT_PATH, DEFAULT_FILE_NAME, DEFAULT_SEARCH_ROOT};
use pdfpeek::extract::{EXIT_BACKEND_UNAVAILABLE, EXIT_EXTRACTION_FAILED, EXIT_SUCCESS};
use pdfpeek::{BackendKind, ExitPolicy, Extractor, ExtractorConfig, ResolverConfig};

#[derive(Parser)]
#[command(name = "pdfpeek")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Locate a PDF through fallback paths and print its page text", long_about = None)]
struct Cli {
    /// Absolute path tried first
    #[arg(long, value_name = "FILE", env = "PDFPEEK_PATH", default_value = DEFAULT_DOCUMENT_PATH)]
    path: PathBuf,

    /// File name tried in the working directory, then searched for
    #[arg(long, value_name = "NAME", env = "PDFPEEK_FILE_NAME", default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Directory tree searched when both fixed candidates are missing
    #[arg(long, value_name = "DIR", env = "PDFPEEK_SEARCH_ROOT", default_value = DEFAULT_SEARCH_ROOT)]
    search_root: PathBuf,

    /// PDF parsing backend
    #[arg(long, value_enum, env = "PDFPEEK_BACKEND", default_value = "lopdf")]
    backend: Backend,

    /// Exit 0 for every handled outcome (missing file, unreadable PDF)
    #[arg(long)]
    legacy_exit_codes: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// lopdf (pure Rust, default)
    Lopdf,
    /// pdf-extract (needs the `pdf-extract` feature)
    PdfExtract,
}

impl From<Backend> for BackendKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Lopdf => BackendKind::Lopdf,
            Backend::PdfExtract => BackendKind::PdfExtract,
        }
    }
}

impl Cli {
    fn into_config(self) -> ExtractorConfig {
        let resolver = ResolverConfig::new()
            .with_document_path(self.path)
            .with_file_name(self.file_name)
            .with_search_root(self.search_root);

        let policy = if self.legacy_exit_codes {
            ExitPolicy::Legacy
        } else {
            ExitPolicy::Distinct
        };

        ExtractorConfig::new()
            .with_resolver(resolver)
            .with_backend(self.backend.into())
            .with_exit_policy(policy)
    }
}

fn main() {
    env_logger::init();

    let config = Cli::parse().into_config();
    let policy = config.exit_policy;
    let extractor = Extractor::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match extractor.run(&mut out) {
        Ok(outcome) => {
            if let pdfpeek::Outcome::Failed { ref report, .. } = outcome {
                log::info!(
                    "{} of {} pages written before the failure",
                    report.pages_emitted,
                    report.pages_total
                );
            }
            outcome.exit_code(policy)
        }
        // the install hint was already printed
        Err(e) if e.is_backend_unavailable() => EXIT_BACKEND_UNAVAILABLE,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            EXIT_EXTRACTION_FAILED
        }
    };

    let code = flush_output(&mut out, code);
    std::process::exit(code);
}

/// Flush stdout; a failed flush turns a clean exit into an extraction failure.
fn flush_output<W: Write>(out: &mut W, code: i32) -> i32 {
    match out.flush() {
        Ok(()) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), pdfpeek::Error::from(e));
            if code == EXIT_SUCCESS {
                EXIT_EXTRACTION_FAILED
            } else {
                code
            }
        }
    }
}
