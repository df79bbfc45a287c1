//! Model directory extraction
//!
//! A new model is recognised by its modeling file:
//! `<src-root>/models/<name>/modeling_<anything>.py`.

use crate::error::{DetectorError, Result};
use regex::Regex;

/// Pattern that locates a model directory among new file paths
#[derive(Debug, Clone)]
pub struct ModelPattern {
    regex: Regex,
}

impl ModelPattern {
    /// Build the pattern for modeling files under `src_root`
    pub fn new(src_root: &str) -> Result<Self> {
        let src_root = src_root.trim_end_matches('/');
        if src_root.is_empty() {
            return Err(DetectorError::InvalidConfig(
                "source root must not be empty".to_string(),
            ));
        }

        let pattern = format!(
            r"{}/(models/[^/]+)/modeling_[^/]*\.py",
            regex::escape(src_root)
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| DetectorError::InvalidConfig(format!("bad model pattern: {}", e)))?;
        Ok(Self { regex })
    }

    /// The `models/<name>` part of `path`, if it is a modeling file
    pub fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.regex
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// First model directory found in `files`; later files are not examined
    pub fn first_match<S: AsRef<str>>(&self, files: &[S]) -> Option<String> {
        files
            .iter()
            .find_map(|f| self.capture(f.as_ref()))
            .map(|m| m.to_string())
    }
}
