//! Candidate path resolution.
//!
//! Candidates are tried in a fixed priority order: the absolute document
//! path, the bare file name in the working directory, then a search of the
//! directory tree under the search root. The first regular file wins.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;

/// Which candidate produced the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// The configured absolute path
    Absolute,
    /// The file name relative to the working directory
    WorkingDir,
    /// Found by walking the search root
    Discovered,
}

/// A candidate that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub source: CandidateSource,
}

/// Resolves the configured anchors to a single existing file.
pub struct PathResolver<'a> {
    config: &'a ResolverConfig,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self { config }
    }

    /// Try each candidate in order.
    ///
    /// `File not found: <path>` is written to `diag` for each fixed candidate
    /// that is missing, and `Found at <path>` when the tree search succeeds.
    /// A run that falls through to the tree search therefore prints two
    /// `File not found` lines, one for the absolute path and one for the
    /// relative path.
    ///
    /// Returns `Ok(None)` once every candidate is exhausted; the only error
    /// is a failed write to `diag`.
    pub fn resolve<W: Write>(&self, diag: &mut W) -> io::Result<Option<Resolved>> {
        let absolute = &self.config.document_path;
        if absolute.is_file() {
            log::debug!("Using absolute candidate {}", absolute.display());
            return Ok(Some(Resolved {
                path: absolute.clone(),
                source: CandidateSource::Absolute,
            }));
        }
        writeln!(diag, "File not found: {}", absolute.display())?;

        let relative = self.config.relative_candidate();
        if relative.is_file() {
            log::debug!("Using working-directory candidate {}", relative.display());
            return Ok(Some(Resolved {
                path: relative,
                source: CandidateSource::WorkingDir,
            }));
        }
        writeln!(diag, "File not found: {}", relative.display())?;

        log::info!(
            "Searching {} for {}",
            self.config.search_root.display(),
            self.config.file_name
        );
        match search_tree(&self.config.search_root, OsStr::new(&self.config.file_name)) {
            Some(path) => {
                writeln!(diag, "Found at {}", path.display())?;
                Ok(Some(Resolved {
                    path,
                    source: CandidateSource::Discovered,
                }))
            }
            None => {
                log::info!(
                    "No file named {} under {}",
                    self.config.file_name,
                    self.config.search_root.display()
                );
                Ok(None)
            }
        }
    }
}

/// Search `root` for a regular file named `file_name`.
///
/// The walk is depth-first pre-order with entries sorted by name, so the same
/// tree always yields the same match: files in a directory are checked before
/// any of its subdirectories. Symlinked directories are not followed and
/// unreadable directories are skipped.
pub fn search_tree(root: &Path, file_name: &OsStr) -> Option<PathBuf> {
    let mut entries: Vec<fs::DirEntry> = match fs::read_dir(root) {
        Ok(read_dir) => read_dir.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            log::debug!("Skipping {}: {}", root.display(), e);
            return None;
        }
    };
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in &entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if entry.file_name().as_os_str() == file_name {
            let path = entry.path();
            // symlinks are accepted only when they point at a regular file
            if path.is_file() {
                return Some(path);
            }
        }
    }

    subdirs
        .into_iter()
        .find_map(|dir| search_tree(&dir, file_name))
}
