//! Resolution anchors and run policy.

use std::path::{Path, PathBuf};

use crate::backend::BackendKind;

/// Absolute location tried first.
pub const DEFAULT_DOCUMENT_PATH: &str =
    r"c:\Users\REAL TIME\Documents\willardpro\71X10M MR MAGURA.pdf";

/// File name tried in the working directory and searched for under the root.
pub const DEFAULT_FILE_NAME: &str = "71X10M MR MAGURA.pdf";

/// Directory tree searched when both fixed candidates are missing.
pub const DEFAULT_SEARCH_ROOT: &str = r"c:\Users\REAL TIME\Documents\willardpro";

/// Where to look for the target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Absolute path checked first
    pub document_path: PathBuf,

    /// Bare file name checked in the working directory, then searched for
    pub file_name: String,

    /// Root of the fallback directory search
    pub search_root: PathBuf,

    /// Directory the relative candidate is joined onto (process cwd if `None`)
    pub working_dir: Option<PathBuf>,
}

impl ResolverConfig {
    /// Create a config holding the built-in anchors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute candidate.
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Set the file name used for the relative candidate and the search.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the root of the fallback search.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Resolve the relative candidate against `dir` instead of the process cwd.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The relative candidate as it will be checked.
    pub fn relative_candidate(&self) -> PathBuf {
        match self.working_dir {
            Some(ref dir) => dir.join(&self.file_name),
            None => Path::new(&self.file_name).to_path_buf(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            file_name: DEFAULT_FILE_NAME.to_string(),
            search_root: PathBuf::from(DEFAULT_SEARCH_ROOT),
            working_dir: None,
        }
    }
}

/// How handled failures map onto process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Separate codes for success, missing input and extraction errors
    #[default]
    Distinct,
    /// Every handled outcome exits 0; only a missing backend exits 1
    Legacy,
}

/// Full configuration for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Candidate anchors
    pub resolver: ResolverConfig,

    /// Parsing backend to load
    pub backend: BackendKind,

    /// Exit-code mapping
    pub exit_policy: ExitPolicy,
}

impl ExtractorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver anchors.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set the parsing backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the exit policy.
    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// Shorthand for [`ExitPolicy::Legacy`].
    pub fn legacy_exit_codes(mut self) -> Self {
        self.exit_policy = ExitPolicy::Legacy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchors() {
        let config = ResolverConfig::default();
        assert_eq!(config.document_path, PathBuf::from(DEFAULT_DOCUMENT_PATH));
        assert_eq!(config.file_name, DEFAULT_FILE_NAME);
        assert_eq!(config.search_root, PathBuf::from(DEFAULT_SEARCH_ROOT));
        assert_eq!(config.relative_candidate(), PathBuf::from(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_resolver_builder() {
        let config = ResolverConfig::new()
            .with_document_path("/srv/docs/report.pdf")
            .with_file_name("report.pdf")
            .with_search_root("/srv")
            .with_working_dir("/tmp/work");

        assert_eq!(config.document_path, PathBuf::from("/srv/docs/report.pdf"));
        assert_eq!(config.search_root, PathBuf::from("/srv"));
        assert_eq!(
            config.relative_candidate(),
            PathBuf::from("/tmp/work/report.pdf")
        );
    }

    #[test]
    fn test_extractor_config_builder() {
        let config = ExtractorConfig::new().legacy_exit_codes();
        assert_eq!(config.exit_policy, ExitPolicy::Legacy);
        assert_eq!(config.backend, BackendKind::Lopdf);

        let config = config.with_exit_policy(ExitPolicy::Distinct);
        assert_eq!(config.exit_policy, ExitPolicy::Distinct);
    }
}
