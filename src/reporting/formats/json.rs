use anyhow::Result;

use crate::reporting::model::ScanResults;
use crate::reporting::formats::{ReportFormat, ReportGenerator};

/// JSON report generator
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    /// Create a new JSON report generator
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn render(&self, results: &ScanResults) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::JSON
    }
}
