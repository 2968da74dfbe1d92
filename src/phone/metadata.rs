// src/phone/metadata.rs
use std::fmt;

use phonenumber::{Mode, Type};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::geo;
use super::target::{PhoneError, PhoneTarget};

/// Line classification reported for a number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineType {
    Mobile,
    Landline,
    #[serde(rename = "VOIP")]
    Voip,
    Unknown,
}

impl LineType {
    /// Collapse the library classification into the four reported kinds.
    ///
    /// Ambiguous `FixedLineOrMobile` (all NANP numbers) is reported as Unknown.
    pub fn from_number_type(kind: Type) -> Self {
        match kind {
            Type::Mobile => LineType::Mobile,
            Type::FixedLine => LineType::Landline,
            Type::Voip => LineType::Voip,
            _ => LineType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Mobile => "Mobile",
            LineType::Landline => "Landline",
            LineType::Voip => "VOIP",
            LineType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive attributes derived from a validated number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneMetadata {
    pub valid: bool,
    pub country: String,
    pub region_code: Option<String>,
    pub calling_code: u16,
    /// Empty when the carrier is unknown
    pub carrier: String,
    pub timezones: Vec<String>,
    pub number_type: LineType,
    pub national_format: String,
    pub international_format: String,
    pub e164_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Derive metadata for a validated number.
///
/// Never fails. When the region database has no entry for the number the
/// problem is recorded in `error` and the geographic fields stay unknown.
pub fn describe(target: &PhoneTarget) -> PhoneMetadata {
    let number = target.number();
    let database = &*phonenumber::metadata::DATABASE;

    let country = number.country();
    let region_code = country.id().map(|id| format!("{:?}", id));
    let calling_code = country.code();

    let mut metadata = PhoneMetadata {
        valid: target.is_valid(),
        country: String::new(),
        region_code: region_code.clone(),
        calling_code,
        carrier: String::new(),
        timezones: vec![geo::UNKNOWN_TIMEZONE.to_string()],
        number_type: LineType::Unknown,
        national_format: number.format().mode(Mode::National).to_string(),
        international_format: number.format().mode(Mode::International).to_string(),
        e164_format: target.e164().to_string(),
        error: None,
    };

    if number.metadata(database).is_none() {
        let error = PhoneError::MissingMetadata {
            number: target.e164().to_string(),
        };
        warn!("{}", error);
        metadata.error = Some(error.to_string());
        return metadata;
    }

    metadata.number_type = LineType::from_number_type(number.number_type(database));

    if let Some(code) = &region_code {
        metadata.country = geo::country_name(code);
        metadata.timezones = geo::timezones(code);
    }

    debug!(
        "Described {}: country={}, type={}",
        target.e164(),
        metadata.country,
        metadata.number_type
    );

    metadata
}
