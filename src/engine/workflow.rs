// src/engine/workflow.rs
use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ReconResult;
use crate::osint::patterns::{generate, NumberForms};
use crate::osint::LookupCollector;
use crate::phone::{describe, PhoneTarget};
use crate::reporting::{ScanResults, ScanTarget};
use crate::utils::http::{HttpClient, HttpTransport};

/// One-pass scan: validate, describe, generate, look up
pub struct ScanWorkflow {
    config: Config,
    collector: LookupCollector,
}

impl ScanWorkflow {
    /// Build a workflow with a real HTTP client from the configuration
    pub fn new(config: Config) -> ReconResult<Self> {
        let http = HttpClient::new(
            Some(config.global.user_agent.clone()),
            Some(config.global.timeout_seconds),
        )?;

        Ok(Self::with_transport(config, Arc::new(http)))
    }

    pub fn with_transport(config: Config, http: Arc<dyn HttpTransport>) -> Self {
        let collector = LookupCollector::new(&config, http);
        Self { config, collector }
    }

    /// Run the scan for a raw phone number.
    ///
    /// Validation happens first; an invalid number returns before any
    /// generation or network work.
    pub async fn run(&self, phone: &str, email: Option<&str>) -> ReconResult<ScanResults> {
        let target = PhoneTarget::validate(phone)?;
        info!("Starting scan for {}", target);

        let home_code = &self.config.patterns.home_calling_code;
        if !NumberForms::new(&target, home_code).is_home_region() {
            warn!(
                "{} is outside home calling code +{}; home-code patterns are skipped",
                target, home_code
            );
        }

        let basic_info = describe(&target);
        let bundle = generate(&target, email, home_code);
        let lookup = self.collector.lookup(&target, email).await;

        info!("Completed scan for {}", target);

        Ok(ScanResults {
            generated_at: Local::now(),
            target: ScanTarget {
                phone: target.raw().to_string(),
                validated_format: target.e164().to_string(),
                email: email.map(str::to_string),
            },
            basic_info,
            lookup,
            bundle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconError;
    use crate::osint::sources::NO_API_KEY;
    use crate::osint::ProviderOutcome;
    use crate::phone::LineType;
    use crate::utils::http::MockHttpTransport;

    fn offline_workflow() -> ScanWorkflow {
        let mut http = MockHttpTransport::new();
        http.expect_get().never();
        ScanWorkflow::with_transport(Config::default(), Arc::new(http))
    }

    #[tokio::test]
    async fn test_invalid_numbers_stop_before_network() {
        let workflow = offline_workflow();
        for raw in ["abc", "", "123"] {
            let result = workflow.run(raw, Some("a@b.com")).await;
            match result {
                Err(error @ ReconError::InvalidPhoneNumber(_)) => assert_eq!(error.exit_code(), 1),
                other => panic!("{:?} should be rejected, got {:?}", raw, other.map(|_| ())),
            }
        }
    }

    #[tokio::test]
    async fn test_north_american_scan_without_credentials() {
        let results = offline_workflow().run("+1-202-555-0123", None).await.unwrap();

        assert_eq!(results.target.validated_format, "+12025550123");
        assert!(results.basic_info.valid);
        assert_eq!(results.basic_info.calling_code, 1);
        assert_eq!(results.basic_info.region_code.as_deref(), Some("US"));
        assert_eq!(
            results.lookup.reverse_lookup.get("numverify"),
            Some(&ProviderOutcome::skipped(NO_API_KEY))
        );
        assert!(!results.lookup.breaches.contains_key("email_breaches"));
        assert!(results.target.email.is_none());
    }

    #[tokio::test]
    async fn test_indian_scan_uses_short_number() {
        let results = offline_workflow().run("+91 98765 43210", None).await.unwrap();

        assert_eq!(results.basic_info.number_type, LineType::Mobile);
        assert_eq!(
            results.bundle.username_patterns.get("short_phone").map(String::as_str),
            Some("9876543210")
        );
    }
}
