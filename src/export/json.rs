//! JSON exporter

use crate::config::Config;
use crate::detector::DetectionReport;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(
        &self,
        report: &DetectionReport,
        _config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_report;

    fn export_value(report: &DetectionReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonExporter
            .export(report, &Config::default(), &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_export() {
        let parsed = export_value(&sample_report(Some("models/gemma")));

        assert_eq!(parsed["model"], "models/gemma");
        assert_eq!(parsed["mainline"]["reference"], "refs/heads/main");
        assert_eq!(parsed["mainline"]["source"], "local");
        assert_eq!(parsed["branching_commits"].as_array().unwrap().len(), 1);
        assert_eq!(
            parsed["new_files"][0],
            "src/transformers/models/gemma/modeling_gemma.py"
        );
    }

    #[test]
    fn test_json_export_no_model_is_null() {
        let parsed = export_value(&sample_report(None));
        assert!(parsed["model"].is_null());
    }
}
