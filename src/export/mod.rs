//! Export system for detection reports

mod console;
mod json;

use crate::config::{Config, OutputFormat};
use crate::detector::DetectionReport;
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete output for the given report
    fn export(
        &self,
        report: &DetectionReport,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::detector::DetectionReport;
    use crate::git::{MainlineRef, RefSource};

    pub fn sample_report(model: Option<&str>) -> DetectionReport {
        DetectionReport {
            mainline: MainlineRef {
                reference: "refs/heads/main".to_string(),
                commit: "a".repeat(40),
                source: RefSource::Local,
            },
            head: "c".repeat(40),
            branching_commits: vec!["b".repeat(40)],
            new_files: vec!["src/transformers/models/gemma/modeling_gemma.py".to_string()],
            model: model.map(str::to_string),
        }
    }
}
