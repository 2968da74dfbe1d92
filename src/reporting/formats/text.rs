// src/reporting/formats/text.rs
use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use crate::reporting::format::{ReportFormat, ReportGenerator};
use crate::reporting::model::{NamedMap, ScanResults};

pub const REPORT_TITLE: &str = "COMPREHENSIVE OSINT RECONNAISSANCE REPORT";

pub const CHECKLIST: &[&str] = &[
    "Check all social media links above",
    "Verify email patterns in password recovery systems",
    "Search public databases for additional info",
    "Check data breach results",
    "Use username patterns for account discovery",
    "Perform Google/DuckDuckGo searches",
    "Check if number appears in business directories",
    "Look for associated images/videos online",
];

pub const LEGAL_DISCLAIMER: &str = "\
This report is for AUTHORIZED penetration testing and security research ONLY.
Ensure proper authorization before using any information gathered.
Respect all privacy laws and platform terms of service.";

/// Plain-text report with fixed section order
pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    let title = format!("{}:", title);
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn pretty<T: Serialize>(out: &mut String, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn bullets(out: &mut String, entries: &NamedMap<String>) -> std::fmt::Result {
    for (name, value) in entries.iter() {
        writeln!(out, "- {}: {}", name, value)?;
    }
    Ok(())
}

impl ReportGenerator for TextReportGenerator {
    fn render(&self, results: &ScanResults) -> Result<String> {
        let mut out = String::new();
        let bundle = &results.bundle;

        writeln!(out, "{}", REPORT_TITLE)?;
        writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(out, "Generated: {}", results.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "Target Phone: {}", results.target.phone)?;
        writeln!(out, "Validated Format: {}", results.target.validated_format)?;
        writeln!(
            out,
            "Target Email: {}",
            results.target.email.as_deref().unwrap_or("Not provided")
        )?;

        heading(&mut out, "BASIC PHONE INFORMATION")?;
        pretty(&mut out, &results.basic_info)?;

        heading(&mut out, "REVERSE PHONE LOOKUP")?;
        pretty(&mut out, &results.lookup.reverse_lookup)?;

        heading(&mut out, "SOCIAL MEDIA SEARCH LINKS")?;
        writeln!(out, "Direct search URLs for investigation:")?;
        bullets(&mut out, &bundle.social_links)?;

        heading(&mut out, "POTENTIAL EMAIL PATTERNS")?;
        writeln!(out, "Generated email addresses to investigate:")?;
        bullets(&mut out, &bundle.email_patterns)?;

        heading(&mut out, "PUBLIC DATABASE LINKS")?;
        pretty(&mut out, &bundle.public_databases)?;

        heading(&mut out, "DATA BREACH INFORMATION")?;
        pretty(&mut out, &results.lookup.breaches)?;

        heading(&mut out, "USERNAME PATTERNS")?;
        writeln!(out, "Potential usernames derived from phone number:")?;
        pretty(&mut out, &bundle.username_patterns)?;

        heading(&mut out, "ADDITIONAL INVESTIGATION LINKS")?;
        pretty(&mut out, &bundle.investigation_links)?;

        heading(&mut out, "INVESTIGATION CHECKLIST")?;
        for (index, item) in CHECKLIST.iter().enumerate() {
            writeln!(out, "{}. \u{2705} {}", index + 1, item)?;
        }

        heading(&mut out, "LEGAL DISCLAIMER")?;
        writeln!(out, "{}", LEGAL_DISCLAIMER)?;

        Ok(out)
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
