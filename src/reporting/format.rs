use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Serialize, Deserialize};

use super::model::ScanResults;

/// Report format enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    JSON,
}

/// Report generator trait
pub trait ReportGenerator: Send + Sync {
    /// Render the scan results in this generator's format
    fn render(&self, results: &ScanResults) -> Result<String>;

    /// Get the supported format
    fn supported_format(&self) -> ReportFormat;
}

/// Convert file extension to report format
pub fn extension_to_format(extension: &str) -> Option<ReportFormat> {
    match extension.to_lowercase().as_str() {
        "json" => Some(ReportFormat::JSON),
        "txt" | "text" | "log" => Some(ReportFormat::Text),
        _ => None,
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::JSON),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::JSON => f.write_str("json"),
        }
    }
}
