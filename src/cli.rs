//! CLI argument parsing using clap

use crate::config::{Config, MergeBaseScan, OutputFormat};
use crate::error::{DetectorError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Find the model directory added on the current branch
#[derive(Parser, Debug)]
#[command(name = "new-model-detector")]
#[command(version)]
#[command(
    about = "Print the model directory whose modeling file was added since the branch left main",
    long_about = None
)]
pub struct Cli {
    /// Repository to inspect (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Mainline branch to compare against
    #[arg(short = 'b', long = "main-branch", value_name = "NAME", default_value = "main")]
    pub main_branch: String,

    /// Remote used when the mainline branch does not exist locally
    #[arg(short = 'r', long = "remote", value_name = "NAME", default_value = "origin")]
    pub remote: String,

    /// Extension new files must have to be considered (repeatable)
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "EXT",
        default_value = ".py"
    )]
    pub extensions: Vec<String>,

    /// Directory that contains the `models/` package
    #[arg(long = "src-root", value_name = "PATH", default_value = "src/transformers")]
    pub src_root: String,

    /// Only diff against the first merge base
    #[arg(long = "first-merge-base-only")]
    pub first_merge_base_only: bool,

    /// Value printed when no new model is found
    #[arg(long = "fallback", value_name = "VALUE")]
    pub fallback: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Output file for results (use "-" for stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "-")]
    pub output: String,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        let extensions: Vec<String> = self
            .extensions
            .into_iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        if extensions.iter().any(|ext| ext.len() < 2) {
            return Err(DetectorError::InvalidConfig(
                "extensions must not be empty".to_string(),
            ));
        }

        validate_ref_name("main branch", &self.main_branch)?;
        validate_ref_name("remote", &self.remote)?;

        let merge_base_scan = if self.first_merge_base_only {
            MergeBaseScan::FirstOnly
        } else {
            MergeBaseScan::All
        };

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        Ok(Config {
            repo_path: self.repo,
            main_branch: self.main_branch,
            remote: self.remote,
            extensions,
            src_root: self.src_root,
            merge_base_scan,
            fallback: self.fallback.unwrap_or_default(),
            output_format,
            output_filename: self.output,
        })
    }
}

/// Reject names git would not accept as a branch or remote, including
/// revision syntax such as `main~1` or `main^`
fn validate_ref_name(what: &str, name: &str) -> Result<()> {
    const FORBIDDEN: [char; 8] = ['~', '^', ':', '?', '*', '[', '\\', '\x7f'];

    let invalid = name.is_empty()
        || name == "@"
        || name.starts_with('-')
        || name.starts_with('/')
        || name.ends_with('/')
        || name.ends_with('.')
        || name.ends_with(".lock")
        || name.contains("..")
        || name.contains("@{")
        || name.contains("//")
        || name.split('/').any(|part| part.starts_with('.'))
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c));

    if invalid {
        return Err(DetectorError::InvalidConfig(format!(
            "invalid {} name '{}'",
            what, name
        )));
    }
    Ok(())
}
