use std::collections::HashMap;
use std::path::Path;
use tracing::{info, debug};

use crate::error::{ReconError, ReconResult};

use super::model::ScanResults;
use super::formats::{ReportFormat, ReportGenerator};
use super::formats::json::JsonReportGenerator;
use super::formats::text::TextReportGenerator;

/// Report generation manager
pub struct ReportManager {
    generators: HashMap<ReportFormat, Box<dyn ReportGenerator>>,
}

impl ReportManager {
    /// Create a new report manager
    pub fn new() -> Self {
        let mut manager = Self {
            generators: HashMap::new(),
        };

        // Register default generators
        manager.register_generator(Box::new(TextReportGenerator::new()));
        manager.register_generator(Box::new(JsonReportGenerator::new()));

        manager
    }

    /// Register a new report generator
    pub fn register_generator(&mut self, generator: Box<dyn ReportGenerator>) {
        let format = generator.supported_format();
        debug!("Registering report generator for format: {:?}", format);
        self.generators.insert(format, generator);
    }

    /// Render scan results in a specific format
    pub fn render(&self, results: &ScanResults, format: ReportFormat) -> ReconResult<String> {
        let generator = self.generators.get(&format)
            .ok_or_else(|| ReconError::InvalidInput(format!("No generator found for format {:?}", format)))?;

        generator.render(results)
            .map_err(|e| ReconError::SerializationError(format!("Failed to render {} report: {}", format, e)))
    }

    /// Write a rendered report, replacing any existing file
    pub async fn write(&self, content: &str, output_path: &Path) -> ReconResult<()> {
        info!("Writing report to {}", output_path.display());

        tokio::fs::write(output_path, content).await
            .map_err(|e| ReconError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write report: {}", e),
            })
    }
}

impl Default for ReportManager {
    fn default() -> Self {
        Self::new()
    }
}
