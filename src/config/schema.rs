use serde::{Serialize, Deserialize};

/// Desktop browser agent sent to the lookup providers
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub global: GlobalConfig,
    pub patterns: PatternConfig,
    pub providers: ProvidersConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

/// Identifier generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternConfig {
    pub home_calling_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvidersConfig {
    pub numverify: NumverifyConfig,
    pub hibp: HibpConfig,
}

/// Reverse phone lookup provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumverifyConfig {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Breach lookup provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HibpConfig {
    pub endpoint: String,
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig {
                user_agent: BROWSER_USER_AGENT.to_string(),
                timeout_seconds: 10,
            },
            patterns: PatternConfig {
                home_calling_code: crate::osint::patterns::DEFAULT_HOME_CALLING_CODE.to_string(),
            },
            providers: ProvidersConfig {
                numverify: NumverifyConfig {
                    endpoint: "http://apilayer.net/api/validate".to_string(),
                    api_key: None,
                },
                hibp: HibpConfig {
                    endpoint: "https://haveibeenpwned.com/api/v3/breachedaccount".to_string(),
                    user_agent: "OSINT-Recon-Tool".to_string(),
                    api_key: None,
                },
            },
        }
    }
}

