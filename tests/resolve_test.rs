//! Integration tests for candidate resolution.

mod common;

use std::fs;
use std::path::Path;

use pdfpeek::{CandidateSource, PathResolver, ResolverConfig};

fn config_for(root: &Path) -> ResolverConfig {
    ResolverConfig::new()
        .with_document_path(root.join("fixed/report.pdf"))
        .with_file_name("report.pdf")
        .with_search_root(root.join("library"))
        .with_working_dir(root.join("cwd"))
}

fn resolve(config: &ResolverConfig) -> (Option<pdfpeek::Resolved>, String) {
    let mut diag = Vec::new();
    let resolved = PathResolver::new(config).resolve(&mut diag).unwrap();
    (resolved, String::from_utf8(diag).unwrap())
}

#[test]
fn test_absolute_candidate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    common::write_pdf(&config.document_path, &["fixed"]);
    common::write_pdf(&config.relative_candidate(), &["cwd"]);
    common::write_pdf(&dir.path().join("library/report.pdf"), &["library"]);

    let (resolved, diag) = resolve(&config);
    let resolved = resolved.unwrap();

    assert_eq!(resolved.source, CandidateSource::Absolute);
    assert_eq!(resolved.path, config.document_path);
    assert!(!diag.contains("File not found"));
}

#[test]
fn test_working_dir_fallback_reports_absolute_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    common::write_pdf(&config.relative_candidate(), &["cwd"]);

    let (resolved, diag) = resolve(&config);
    let resolved = resolved.unwrap();

    assert_eq!(resolved.source, CandidateSource::WorkingDir);
    assert_eq!(resolved.path, config.relative_candidate());
    assert_eq!(diag.matches("File not found").count(), 1);
    assert_eq!(
        diag.trim_end(),
        format!("File not found: {}", config.document_path.display())
    );
}

#[test]
fn test_search_fallback_reports_found_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let nested = dir.path().join("library/2023/march/report.pdf");
    common::write_pdf(&nested, &["library"]);

    let (resolved, diag) = resolve(&config);
    let resolved = resolved.unwrap();

    assert_eq!(resolved.source, CandidateSource::Discovered);
    assert_eq!(resolved.path, nested);
    assert_eq!(diag.matches("File not found").count(), 2);
    assert!(diag.ends_with(&format!("Found at {}\n", nested.display())));
}

#[test]
fn test_nothing_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    fs::create_dir_all(dir.path().join("library/empty")).unwrap();
    fs::write(dir.path().join("library/other.pdf"), b"%PDF-1.4\n").unwrap();

    let (resolved, diag) = resolve(&config);

    assert!(resolved.is_none());
    assert!(!diag.contains("Found at"));
    assert!(pdfpeek::resolve(&config).is_none());
}

#[test]
fn test_directory_named_like_target_is_not_a_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    fs::create_dir_all(&config.document_path).unwrap();
    common::write_pdf(&config.relative_candidate(), &["cwd"]);

    let resolved = pdfpeek::resolve(&config).unwrap();
    assert_eq!(resolved.source, CandidateSource::WorkingDir);
}

#[test]
fn test_duplicate_names_resolve_deterministically() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    common::write_pdf(&dir.path().join("library/b/report.pdf"), &["b"]);
    common::write_pdf(&dir.path().join("library/a/x/report.pdf"), &["a/x"]);
    common::write_pdf(&dir.path().join("library/a/report.pdf"), &["a"]);

    for _ in 0..3 {
        let resolved = pdfpeek::resolve(&config).unwrap();
        assert_eq!(resolved.path, dir.path().join("library/a/report.pdf"));
    }
}
