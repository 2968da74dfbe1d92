// src/phone/geo.rs
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Timezone reported when a region has no known zones
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

/// Display name and IANA zones for an ISO 3166-1 region
#[derive(Debug, Clone, Copy)]
pub struct RegionInfo {
    pub name: &'static str,
    pub timezones: &'static [&'static str],
}

const REGION_TABLE: &[(&str, &str, &[&str])] = &[
    ("AE", "United Arab Emirates", &["Asia/Dubai"]),
    ("AR", "Argentina", &["America/Buenos_Aires"]),
    ("AT", "Austria", &["Europe/Vienna"]),
    ("AU", "Australia", &[
        "Australia/Adelaide", "Australia/Brisbane", "Australia/Darwin",
        "Australia/Hobart", "Australia/Perth", "Australia/Sydney",
    ]),
    ("BD", "Bangladesh", &["Asia/Dhaka"]),
    ("BE", "Belgium", &["Europe/Brussels"]),
    ("BR", "Brazil", &[
        "America/Manaus", "America/Noronha", "America/Rio_Branco", "America/Sao_Paulo",
    ]),
    ("CA", "Canada", &[
        "America/Edmonton", "America/Halifax", "America/Regina", "America/St_Johns",
        "America/Toronto", "America/Vancouver", "America/Winnipeg",
    ]),
    ("CH", "Switzerland", &["Europe/Zurich"]),
    ("CL", "Chile", &["America/Santiago"]),
    ("CN", "China", &["Asia/Shanghai"]),
    ("CO", "Colombia", &["America/Bogota"]),
    ("CZ", "Czechia", &["Europe/Prague"]),
    ("DE", "Germany", &["Europe/Berlin"]),
    ("DK", "Denmark", &["Europe/Copenhagen"]),
    ("EG", "Egypt", &["Africa/Cairo"]),
    ("ES", "Spain", &["Atlantic/Canary", "Europe/Madrid"]),
    ("FI", "Finland", &["Europe/Helsinki"]),
    ("FR", "France", &["Europe/Paris"]),
    ("GB", "United Kingdom", &["Europe/London"]),
    ("GR", "Greece", &["Europe/Athens"]),
    ("HK", "Hong Kong", &["Asia/Hong_Kong"]),
    ("ID", "Indonesia", &["Asia/Jakarta", "Asia/Jayapura", "Asia/Makassar"]),
    ("IE", "Ireland", &["Europe/Dublin"]),
    ("IL", "Israel", &["Asia/Jerusalem"]),
    ("IN", "India", &["Asia/Calcutta"]),
    ("IR", "Iran", &["Asia/Tehran"]),
    ("IT", "Italy", &["Europe/Rome"]),
    ("JP", "Japan", &["Asia/Tokyo"]),
    ("KE", "Kenya", &["Africa/Nairobi"]),
    ("KR", "South Korea", &["Asia/Seoul"]),
    ("LK", "Sri Lanka", &["Asia/Colombo"]),
    ("MX", "Mexico", &[
        "America/Cancun", "America/Mexico_City", "America/Tijuana",
    ]),
    ("MY", "Malaysia", &["Asia/Kuala_Lumpur"]),
    ("NG", "Nigeria", &["Africa/Lagos"]),
    ("NL", "Netherlands", &["Europe/Amsterdam"]),
    ("NO", "Norway", &["Europe/Oslo"]),
    ("NP", "Nepal", &["Asia/Katmandu"]),
    ("NZ", "New Zealand", &["Pacific/Auckland", "Pacific/Chatham"]),
    ("PH", "Philippines", &["Asia/Manila"]),
    ("PK", "Pakistan", &["Asia/Karachi"]),
    ("PL", "Poland", &["Europe/Warsaw"]),
    ("PT", "Portugal", &["Atlantic/Azores", "Europe/Lisbon"]),
    ("RO", "Romania", &["Europe/Bucharest"]),
    ("RU", "Russia", &[
        "Asia/Novosibirsk", "Asia/Vladivostok", "Asia/Yekaterinburg", "Europe/Moscow",
    ]),
    ("SA", "Saudi Arabia", &["Asia/Riyadh"]),
    ("SE", "Sweden", &["Europe/Stockholm"]),
    ("SG", "Singapore", &["Asia/Singapore"]),
    ("TH", "Thailand", &["Asia/Bangkok"]),
    ("TR", "Turkey", &["Europe/Istanbul"]),
    ("TW", "Taiwan", &["Asia/Taipei"]),
    ("UA", "Ukraine", &["Europe/Kiev"]),
    ("US", "United States", &[
        "America/Adak", "America/Anchorage", "America/Chicago", "America/Denver",
        "America/Los_Angeles", "America/New_York", "America/Phoenix", "Pacific/Honolulu",
    ]),
    ("VN", "Vietnam", &["Asia/Saigon"]),
    ("ZA", "South Africa", &["Africa/Johannesburg"]),
];

static REGIONS: Lazy<HashMap<&'static str, RegionInfo>> = Lazy::new(|| {
    REGION_TABLE
        .iter()
        .map(|&(code, name, timezones)| (code, RegionInfo { name, timezones }))
        .collect()
});

/// Look up a region by its ISO 3166-1 alpha-2 code.
pub fn region_info(code: &str) -> Option<RegionInfo> {
    REGIONS.get(code.to_ascii_uppercase().as_str()).copied()
}

/// English display name, falling back to the region code itself.
pub fn country_name(code: &str) -> String {
    region_info(code)
        .map(|info| info.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn timezones(code: &str) -> Vec<String> {
    match region_info(code) {
        Some(info) if !info.timezones.is_empty() => {
            info.timezones.iter().map(|tz| tz.to_string()).collect()
        }
        _ => vec![UNKNOWN_TIMEZONE.to_string()],
    }
}
