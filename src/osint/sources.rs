// src/osint/sources.rs
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::{HibpConfig, NumverifyConfig};
use crate::phone::PhoneTarget;
use crate::utils::http::HttpTransport;

pub const NO_API_KEY: &str = "No API key provided";
pub const NO_BREACHES_FOUND: &str = "No breaches found for this email";
pub const NUMVERIFY_REJECTED: &str = "Invalid number according to Numverify";

/// What a single provider contributed to the scan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderOutcome {
    /// Raw JSON returned by the provider
    Data(serde_json::Value),
    /// Informational result that is not an error
    Notice(String),
    /// The provider was not queried
    Skipped { skipped: String },
    Failed { error: String },
}

impl ProviderOutcome {
    pub fn notice(message: impl Into<String>) -> Self {
        ProviderOutcome::Notice(message.into())
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        ProviderOutcome::Skipped { skipped: reason.into() }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        ProviderOutcome::Failed { error: error.into() }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProviderOutcome::Failed { .. })
    }
}

/// Which report section a source feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSection {
    ReverseLookup,
    Breaches,
}

/// Inputs shared by every lookup source
#[derive(Debug, Clone, Copy)]
pub struct LookupRequest<'a> {
    pub target: &'a PhoneTarget,
    pub email: Option<&'a str>,
}

/// Trait for external lookup providers
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// Key the outcome is recorded under
    fn name(&self) -> &str;

    fn section(&self) -> LookupSection;

    /// Query the provider once. `None` means the source does not apply to
    /// this request and leaves no entry.
    async fn collect(&self, request: &LookupRequest<'_>) -> Option<ProviderOutcome>;
}

/// Numverify reverse phone validation
pub struct NumverifySource {
    config: NumverifyConfig,
    http: Arc<dyn HttpTransport>,
}

impl NumverifySource {
    pub fn new(config: NumverifyConfig, http: Arc<dyn HttpTransport>) -> Self {
        Self { config, http }
    }

    fn request_url(&self, api_key: &str, number: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.config.endpoint,
            &[("access_key", api_key), ("number", number)],
        )
    }
}

#[async_trait]
impl LookupSource for NumverifySource {
    fn name(&self) -> &str {
        "numverify"
    }

    fn section(&self) -> LookupSection {
        LookupSection::ReverseLookup
    }

    async fn collect(&self, request: &LookupRequest<'_>) -> Option<ProviderOutcome> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("Skipping numverify: no API key configured");
            return Some(ProviderOutcome::skipped(NO_API_KEY));
        };

        let url = match self.request_url(api_key, request.target.e164()) {
            Ok(url) => url,
            Err(e) => return Some(ProviderOutcome::failed(format!("Invalid endpoint: {}", e))),
        };

        debug!("Querying numverify for {}", request.target.e164());

        let outcome = match self.http.get(url.as_str(), &[]).await {
            Ok(reply) if reply.status == 200 => match reply.json() {
                Ok(data) if data.get("valid").and_then(|v| v.as_bool()) == Some(true) => {
                    ProviderOutcome::Data(data)
                }
                Ok(_) => ProviderOutcome::failed(NUMVERIFY_REJECTED),
                Err(e) => ProviderOutcome::failed(format!("{:#}", e)),
            },
            Ok(reply) => ProviderOutcome::failed(format!(
                "API request failed with status {}",
                reply.status
            )),
            Err(e) => ProviderOutcome::failed(redact_key(&format!("{:#}", e), api_key)),
        };

        if let ProviderOutcome::Failed { error } = &outcome {
            warn!("numverify lookup failed: {}", error);
        }

        Some(outcome)
    }
}

/// Mask an API key in an error message, raw or query-encoded
fn redact_key(message: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return message.to_string();
    }

    let encoded: String = url::form_urlencoded::byte_serialize(api_key.as_bytes()).collect();
    message.replace(api_key, "[REDACTED]").replace(&encoded, "[REDACTED]")
}

/// Have I Been Pwned breached-account lookup
pub struct HibpSource {
    config: HibpConfig,
    http: Arc<dyn HttpTransport>,
}

impl HibpSource {
    pub fn new(config: HibpConfig, http: Arc<dyn HttpTransport>) -> Self {
        Self { config, http }
    }

    fn request_url(&self, email: &str) -> Result<Url, String> {
        let mut url = Url::parse(&self.config.endpoint).map_err(|e| e.to_string())?;
        url.path_segments_mut()
            .map_err(|_| format!("{} cannot take a path", self.config.endpoint))?
            .pop_if_empty()
            .push(email);
        Ok(url)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("User-Agent".to_string(), self.config.user_agent.clone())];
        if let Some(key) = &self.config.api_key {
            headers.push(("hibp-api-key".to_string(), key.clone()));
        }
        headers
    }
}

#[async_trait]
impl LookupSource for HibpSource {
    fn name(&self) -> &str {
        "email_breaches"
    }

    fn section(&self) -> LookupSection {
        LookupSection::Breaches
    }

    async fn collect(&self, request: &LookupRequest<'_>) -> Option<ProviderOutcome> {
        let email = request.email?;

        let url = match self.request_url(email) {
            Ok(url) => url,
            Err(e) => return Some(ProviderOutcome::failed(format!("Error: {}", e))),
        };

        debug!("Querying breach data for {}", email);

        let outcome = match self.http.get(url.as_str(), &self.headers()).await {
            Ok(reply) => match reply.status {
                200 => match reply.json() {
                    Ok(data) => ProviderOutcome::Data(data),
                    Err(e) => ProviderOutcome::failed(format!("Error: {:#}", e)),
                },
                404 => ProviderOutcome::notice(NO_BREACHES_FOUND),
                status => ProviderOutcome::failed(format!("API error: {}", status)),
            },
            Err(e) => ProviderOutcome::failed(format!("Error: {:#}", e)),
        };

        if let ProviderOutcome::Failed { error } = &outcome {
            warn!("Breach lookup failed: {}", error);
        }

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use crate::config::Config;
    use crate::utils::http::{HttpReply, MockHttpTransport};

    fn target() -> PhoneTarget {
        PhoneTarget::validate("+919876543210").unwrap()
    }

    fn numverify(api_key: Option<&str>, http: MockHttpTransport) -> NumverifySource {
        let mut config = Config::default().providers.numverify;
        config.api_key = api_key.map(str::to_string);
        NumverifySource::new(config, Arc::new(http))
    }

    fn hibp(http: MockHttpTransport) -> HibpSource {
        HibpSource::new(Config::default().providers.hibp, Arc::new(http))
    }

    #[tokio::test]
    async fn test_numverify_without_key_sends_nothing() {
        let mut http = MockHttpTransport::new();
        http.expect_get().never();

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(None, http).collect(&request).await;

        assert_eq!(outcome, Some(ProviderOutcome::skipped(NO_API_KEY)));
    }

    #[tokio::test]
    async fn test_numverify_valid_response() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .withf(|url, _| url.contains("access_key=k123") && url.contains("number=%2B919876543210"))
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, r#"{"valid":true,"carrier":"Jio"}"#)));

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(Some("k123"), http).collect(&request).await.unwrap();

        match outcome {
            ProviderOutcome::Data(data) => assert_eq!(data["carrier"], "Jio"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_numverify_rejection_and_status_errors() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, r#"{"valid":false}"#)));
        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(Some("k"), http).collect(&request).await;
        assert_eq!(outcome, Some(ProviderOutcome::failed(NUMVERIFY_REJECTED)));

        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(503, "")));
        let outcome = numverify(Some("k"), http).collect(&request).await;
        assert_eq!(
            outcome,
            Some(ProviderOutcome::failed("API request failed with status 503"))
        );
    }

    #[tokio::test]
    async fn test_numverify_transport_error_is_recorded() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("operation timed out")));

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(Some("k"), http).collect(&request).await.unwrap();

        assert!(outcome.is_failure());
        assert_eq!(outcome, ProviderOutcome::failed("operation timed out"));
    }

    #[tokio::test]
    async fn test_numverify_error_never_exposes_api_key() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|url, _| {
                Err(anyhow::anyhow!("error sending request for url ({})", url))
                    .context("Request failed")
            });

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(Some("s3cret+key"), http).collect(&request).await.unwrap();

        let ProviderOutcome::Failed { error } = outcome else {
            panic!("expected a failure, got {:?}", outcome);
        };
        assert!(error.starts_with("Request failed: error sending request"));
        assert!(!error.contains("s3cret"), "key leaked: {}", error);
        assert!(error.contains("access_key=[REDACTED]"));
    }

    #[tokio::test]
    async fn test_numverify_non_json_body_is_recorded() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, "<html>")));

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        let outcome = numverify(Some("k"), http).collect(&request).await.unwrap();

        match outcome {
            ProviderOutcome::Failed { error } => assert!(error.contains("not valid JSON"), "{}", error),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_redact_key() {
        assert_eq!(redact_key("key=abc&n=1", "abc"), "key=[REDACTED]&n=1");
        assert_eq!(redact_key("key=a%2Bb", "a+b"), "key=[REDACTED]");
        assert_eq!(redact_key("nothing here", ""), "nothing here");
    }

    #[tokio::test]
    async fn test_hibp_skipped_without_email() {
        let mut http = MockHttpTransport::new();
        http.expect_get().never();

        let target = target();
        let request = LookupRequest { target: &target, email: None };
        assert_eq!(hibp(http).collect(&request).await, None);
    }

    #[tokio::test]
    async fn test_hibp_not_found_means_no_breaches() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .withf(|url, headers| {
                url.ends_with("/breachedaccount/someone@example.com")
                    && headers.iter().any(|(name, value)| name == "User-Agent" && value == "OSINT-Recon-Tool")
            })
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(404, "")));

        let target = target();
        let request = LookupRequest { target: &target, email: Some("someone@example.com") };
        let outcome = hibp(http).collect(&request).await.unwrap();

        assert_eq!(outcome, ProviderOutcome::notice(NO_BREACHES_FOUND));
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_hibp_breaches_and_errors() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(200, r#"[{"Name":"Adobe"}]"#)));
        let target = target();
        let request = LookupRequest { target: &target, email: Some("a@b.com") };
        match hibp(http).collect(&request).await.unwrap() {
            ProviderOutcome::Data(data) => assert_eq!(data[0]["Name"], "Adobe"),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(401, "")));
        assert_eq!(
            hibp(http).collect(&request).await,
            Some(ProviderOutcome::failed("API error: 401"))
        );
    }

    #[tokio::test]
    async fn test_hibp_transport_error_is_recorded() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("timed out")));

        let target = target();
        let request = LookupRequest { target: &target, email: Some("a@b.com") };
        assert_eq!(
            hibp(http).collect(&request).await,
            Some(ProviderOutcome::failed("Error: timed out"))
        );
    }

    #[tokio::test]
    async fn test_hibp_sends_api_key_header_when_configured() {
        let mut http = MockHttpTransport::new();
        http.expect_get()
            .withf(|_, headers| headers.iter().any(|(name, value)| name == "hibp-api-key" && value == "secret"))
            .times(1)
            .returning(|_, _| Ok(HttpReply::new(404, "")));

        let mut config = Config::default().providers.hibp;
        config.api_key = Some("secret".to_string());
        let source = HibpSource::new(config, Arc::new(http));

        let target = target();
        let request = LookupRequest { target: &target, email: Some("a@b.com") };
        assert!(source.collect(&request).await.is_some());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(ProviderOutcome::skipped(NO_API_KEY)).unwrap(),
            serde_json::json!({ "skipped": NO_API_KEY })
        );
        assert_eq!(
            serde_json::to_value(ProviderOutcome::failed("boom")).unwrap(),
            serde_json::json!({ "error": "boom" })
        );
        assert_eq!(
            serde_json::to_value(ProviderOutcome::notice(NO_BREACHES_FOUND)).unwrap(),
            serde_json::json!(NO_BREACHES_FOUND)
        );
    }
}
