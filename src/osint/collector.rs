// src/osint/collector.rs
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::phone::PhoneTarget;
use crate::reporting::model::NamedMap;
use crate::utils::http::HttpTransport;

use super::sources::{
    HibpSource, LookupRequest, LookupSection, LookupSource, NumverifySource, ProviderOutcome,
};

/// Fixed pointer recorded for phone numbers; no public phone breach API exists
pub const PHONE_BREACH_HINT: &str = "Check: https://haveibeenpwned.com/ (Phone breach data limited)";

/// Outcomes of the external lookups, grouped by report section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupResult {
    pub reverse_lookup: NamedMap<ProviderOutcome>,
    pub breaches: NamedMap<ProviderOutcome>,
}

/// Runs each registered lookup source exactly once, in order
pub struct LookupCollector {
    sources: Vec<Box<dyn LookupSource>>,
}

impl LookupCollector {
    /// Create a collector with the built-in providers
    pub fn new(config: &Config, http: Arc<dyn HttpTransport>) -> Self {
        let sources: Vec<Box<dyn LookupSource>> = vec![
            Box::new(NumverifySource::new(config.providers.numverify.clone(), http.clone())),
            Box::new(HibpSource::new(config.providers.hibp.clone(), http)),
        ];

        info!("Lookup collector initialized with {} sources", sources.len());
        Self { sources }
    }

    /// List all available lookup sources
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|source| source.name().to_string()).collect()
    }

    /// Query every source sequentially. A failing source is recorded and the
    /// remaining sources still run.
    pub async fn lookup(&self, target: &PhoneTarget, email: Option<&str>) -> LookupResult {
        let request = LookupRequest { target, email };
        let mut result = LookupResult::default();

        for source in &self.sources {
            debug!("Running lookup source: {}", source.name());

            let Some(outcome) = source.collect(&request).await else {
                debug!("Lookup source {} not applicable", source.name());
                continue;
            };

            if outcome.is_failure() {
                warn!("Lookup source {} reported an error", source.name());
            }

            match source.section() {
                LookupSection::ReverseLookup => result.reverse_lookup.insert(source.name(), outcome),
                LookupSection::Breaches => result.breaches.insert(source.name(), outcome),
            }
        }

        result
            .breaches
            .insert("phone_breach_info", ProviderOutcome::notice(PHONE_BREACH_HINT));

        result
    }
}
