//! Error types for new-model-detector

use thiserror::Error;

/// Result type alias for detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Error types for detector operations
#[derive(Error, Debug)]
pub enum DetectorError {
    /// The given path is not inside a git repository
    #[error("Not a git repository: '{path}'")]
    NotGitRepo { path: String },

    /// Neither the local branch nor its remote-tracking ref exists
    #[error(
        "Could not resolve mainline: neither 'refs/heads/{branch}' nor \
         'refs/remotes/{remote}/{branch}' exists"
    )]
    RefNotFound { branch: String, remote: String },

    /// Git operation failed
    #[error("Git error: {0}")]
    GitError(String),

    /// Git produced output we could not parse
    #[error("Malformed git output: {0}")]
    MalformedGitOutput(String),

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_not_found_mentions_both_refs() {
        let err = DetectorError::RefNotFound {
            branch: "main".to_string(),
            remote: "origin".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("refs/heads/main"));
        assert!(msg.contains("refs/remotes/origin/main"));
    }
}
