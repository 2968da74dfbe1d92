use clap::Parser;
use std::path::PathBuf;

use crate::reporting::{extension_to_format, ReportFormat};

#[derive(Parser, Debug, Clone)]
#[command(name = "phonerecon")]
#[command(version)]
#[command(about = "Phone number reconnaissance for authorized security assessments")]
pub struct Args {
    #[arg(help = "Phone number to investigate, with country code (e.g. +919876543210)")]
    pub phone: String,

    #[arg(short, long, help = "Associated email address (optional)")]
    pub email: Option<String>,

    #[arg(short, long, help = "Output file for detailed report")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Numverify API key for enhanced lookup")]
    pub api_key: Option<String>,

    #[arg(short, long, help = "Report format (text, json); defaults to the output file extension")]
    pub format: Option<ReportFormat>,

    #[arg(
        long,
        value_parser = parse_calling_code,
        help = "Calling code stripped when deriving short numbers (default 91)"
    )]
    pub home_code: Option<String>,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write the effective configuration to this file")]
    pub save_config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Accept a country calling code: one to three digits, optional leading `+`
fn parse_calling_code(value: &str) -> Result<String, String> {
    let code = value.strip_prefix('+').unwrap_or(value);
    let well_formed = (1..=3).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_digit())
        && !code.starts_with('0');

    if well_formed {
        Ok(code.to_string())
    } else {
        Err(format!("'{}' is not a country calling code", value))
    }
}

impl Args {
    /// Explicit `--format`, else the output extension, else text
    pub fn report_format(&self) -> ReportFormat {
        if let Some(format) = self.format {
            return format;
        }

        self.output
            .as_ref()
            .and_then(|path| path.extension())
            .and_then(|ext| ext.to_str())
            .and_then(extension_to_format)
            .unwrap_or_default()
    }
}
