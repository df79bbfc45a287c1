//! Configuration types for new-model-detector

use std::path::PathBuf;

/// Output format for the detection report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain progress lines followed by the model path
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// Which branching commits the new-file scan diffs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeBaseScan {
    /// Diff against every merge base
    #[default]
    All,
    /// Stop after the first merge base
    FirstOnly,
}

/// Configuration options for the detector
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository to inspect (None = current working directory)
    pub repo_path: Option<PathBuf>,

    /// Mainline branch name (default: main)
    pub main_branch: String,

    /// Remote whose tracking ref is used when the local branch is missing
    pub remote: String,

    /// Extensions a new file must end with to be reported (case-sensitive)
    pub extensions: Vec<String>,

    /// Directory prefix of the model pattern (default: src/transformers)
    pub src_root: String,

    /// Which merge bases to diff against
    pub merge_base_scan: MergeBaseScan,

    /// Printed instead of the model path when nothing matched
    pub fallback: String,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: None,
            main_branch: String::from("main"),
            remote: String::from("origin"),
            extensions: vec![String::from(".py")],
            src_root: String::from("src/transformers"),
            merge_base_scan: MergeBaseScan::All,
            fallback: String::new(),
            output_format: OutputFormat::Console,
            output_filename: String::from("-"),
        }
    }
}

impl Config {
    /// Whether `path` ends with one of the configured extensions
    pub fn has_source_extension(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.main_branch, "main");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.extensions, vec![".py".to_string()]);
        assert_eq!(config.merge_base_scan, MergeBaseScan::All);
        assert!(config.fallback.is_empty());
    }

    #[test]
    fn test_has_source_extension() {
        let config = Config::default();
        assert!(config.has_source_extension("src/transformers/models/foo/modeling_foo.py"));
        assert!(!config.has_source_extension("docs/source/en/model_doc/foo.md"));
        assert!(!config.has_source_extension("setup.pyc"));
    }

    #[test]
    fn test_has_source_extension_case_sensitive() {
        let config = Config::default();
        assert!(!config.has_source_extension("script.PY"));
    }

    #[test]
    fn test_has_source_extension_multiple() {
        let config = Config {
            extensions: vec![".py".to_string(), ".pyi".to_string()],
            ..Config::default()
        };
        assert!(config.has_source_extension("stub.pyi"));
        assert!(config.has_source_extension("mod.py"));
    }
}
