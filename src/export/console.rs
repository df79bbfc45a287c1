//! Console (line-oriented) exporter

use crate::config::Config;
use crate::detector::DetectionReport;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Progress lines followed by the model path on its own line
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(
        &self,
        report: &DetectionReport,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        writeln!(
            writer,
            "{} is at {}",
            config.main_branch, report.mainline.commit
        )?;
        writeln!(writer, "Current head is at {}", report.head)?;
        for commit in &report.branching_commits {
            writeln!(writer, "Branching commit: {}", commit)?;
        }

        // Last line is the only one scripts should consume
        let model = report.model.as_deref().unwrap_or(config.fallback.as_str());
        writeln!(writer, "{}", model)?;

        Ok(())
    }
}
