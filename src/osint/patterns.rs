// src/osint/patterns.rs
//! Deterministic investigation URLs and identifier guesses.
//!
//! Everything here is string templating over a validated number; nothing
//! touches the network. Templates use `{number}` (E.164 digits without `+`),
//! `{short}` (number without the home calling code), `{e164}`, `{code}` and
//! `{email}` placeholders.

use serde::Serialize;

use crate::phone::PhoneTarget;
use crate::reporting::model::NamedMap;

/// Calling code stripped from numbers to build "short" local forms (India)
pub const DEFAULT_HOME_CALLING_CODE: &str = "91";

/// Mail providers crossed with every number form
pub const EMAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "rediffmail.com",
    "icloud.com",
];

const PHONE_SOCIAL_TEMPLATES: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/login/identify?ctx=recover&phone={number}"),
    ("Facebook Search", "https://www.facebook.com/public?query={number}"),
    ("LinkedIn", "https://www.linkedin.com/search/results/all/?keywords={number}"),
    ("Twitter", "https://twitter.com/search?q={number}&src=typed_query"),
    ("Instagram", "https://www.instagram.com/accounts/account_recovery/?phone_number={number}"),
    ("WhatsApp", "https://wa.me/{number}"),
    ("Telegram", "https://t.me/{number}"),
    ("Truecaller", "https://www.truecaller.com/search/in/{short}"),
    ("Signal", "https://signal.org/ (Check if number is registered)"),
    (
        "Snapchat",
        "https://accounts.snapchat.com/accounts/login?continue=%2Faccounts%2Fwelcome?phone_number=%2B{number}",
    ),
];

const EMAIL_SOCIAL_TEMPLATES: &[(&str, &str)] = &[
    ("Facebook Email", "https://www.facebook.com/login/identify?ctx=recover&email={email}"),
    ("LinkedIn Email", "https://www.linkedin.com/search/results/all/?keywords={email}"),
    ("Twitter Email", "https://twitter.com/search?q={email}&src=typed_query"),
    ("Instagram Email", "https://www.instagram.com/accounts/account_recovery/?email={email}"),
    ("Have I Been Pwned", "https://haveibeenpwned.com/account/{email}"),
    ("Google Search", "https://www.google.com/search?q=\"{email}\""),
    ("Gravatar", "https://en.gravatar.com/{email}"),
];

/// Carrier mailbox guesses for the home region
const REGIONAL_EMAIL_TEMPLATES: &[(&str, &str)] = &[
    ("jio_pattern", "{short}@jio.com"),
    ("airtel_pattern", "{short}@airtel.com"),
    ("vodafone_pattern", "{short}@vodafone.com"),
];

const PUBLIC_DATABASE_TEMPLATES: &[(&str, &str)] = &[
    (
        "IndiaTrace",
        "https://www.indiatrace.com/trace-mobile-number-location/trace-mobile-number.php?number={short}",
    ),
    ("BharatiyaMobile", "https://trace.bharatiyamobile.com/?numb={short}"),
    ("Truecaller Web", "https://www.truecaller.com/search/in/{short}"),
    ("NumberGuru", "https://www.numberguru.com/phone/{short}"),
    ("SpyDialer", "https://www.spydialer.com/default.aspx?phone={short}"),
    ("SyncMe", "https://sync.me/search/?number={short}"),
    ("Whitepages", "https://www.whitepages.com/phone/{short}"),
    ("ZabaSearch", "https://www.zabasearch.com/phone/{short}"),
];

const USERNAME_TEMPLATES: &[(&str, &str)] = &[
    ("full_phone", "{number}"),
    ("short_phone", "{short}"),
    ("phone_with_{code}", "{code}{short}"),
    ("phone_jio", "jio{short}"),
    ("phone_user", "user{short}"),
    ("phone_mobile", "mobile{short}"),
];

const PHONE_SEARCH_TEMPLATES: &[(&str, &str)] = &[
    ("google_search_phone", "https://www.google.com/search?q=\"{e164}\""),
    ("google_search_short", "https://www.google.com/search?q=\"{short}\""),
    ("duckduckgo_phone", "https://duckduckgo.com/?q=\"{e164}\""),
    ("bing_search", "https://www.bing.com/search?q=\"{e164}\""),
    ("facebook_site_search", "https://www.google.com/search?q=site:facebook.com+\"%2B{number}\""),
    ("linkedin_site_search", "https://www.google.com/search?q=site:linkedin.com+\"%2B{number}\""),
    ("twitter_site_search", "https://www.google.com/search?q=site:twitter.com+\"%2B{number}\""),
    ("instagram_site_search", "https://www.google.com/search?q=site:instagram.com+\"%2B{number}\""),
];

const EMAIL_SEARCH_TEMPLATES: &[(&str, &str)] = &[
    ("google_search_email", "https://www.google.com/search?q=\"{email}\""),
    ("email_breach_check", "https://haveibeenpwned.com/"),
    ("email_reputation", "https://www.email-validator.net/"),
];

/// The textual forms of one number used to fill templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberForms {
    pub e164: String,
    /// E.164 without `+` or spaces
    pub clean: String,
    /// `clean` without the home calling code for home-region numbers,
    /// otherwise identical to `clean`
    pub short: String,
    pub home_code: String,
    home: bool,
}

impl NumberForms {
    pub fn new(target: &PhoneTarget, home_code: &str) -> Self {
        let clean = target.clean_digits();
        let calling_code = target.number().country().code().to_string();
        let home = calling_code == home_code;

        let short = match clean.strip_prefix(&calling_code) {
            Some(rest) if home => rest.to_string(),
            _ => clean.clone(),
        };

        Self {
            e164: target.e164().to_string(),
            clean,
            short,
            home_code: home_code.to_string(),
            home,
        }
    }

    /// Whether the number's calling code is the home calling code
    pub fn is_home_region(&self) -> bool {
        self.home
    }

    fn fill(&self, template: &str, email: Option<&str>) -> String {
        let filled = template
            .replace("{number}", &self.clean)
            .replace("{short}", &self.short)
            .replace("{e164}", &self.e164)
            .replace("{code}", &self.home_code);

        match email {
            Some(email) => filled.replace("{email}", email),
            None => filled,
        }
    }

    fn fill_all(&self, templates: &[(&str, &str)], email: Option<&str>) -> NamedMap<String> {
        templates
            .iter()
            .map(|(name, template)| (self.fill(name, None), self.fill(template, email)))
            .collect()
    }
}

/// Candidate URLs and identifiers derived from one number (and email)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvestigationBundle {
    pub social_links: NamedMap<String>,
    pub email_patterns: NamedMap<String>,
    pub public_databases: NamedMap<String>,
    pub username_patterns: NamedMap<String>,
    pub investigation_links: NamedMap<String>,
}

/// Build the full bundle for a target.
pub fn generate(target: &PhoneTarget, email: Option<&str>, home_code: &str) -> InvestigationBundle {
    let forms = NumberForms::new(target, home_code);

    InvestigationBundle {
        social_links: social_links(&forms, email),
        email_patterns: email_patterns(&forms),
        public_databases: forms.fill_all(PUBLIC_DATABASE_TEMPLATES, None),
        username_patterns: username_patterns(&forms),
        investigation_links: investigation_links(&forms, email),
    }
}

pub fn social_links(forms: &NumberForms, email: Option<&str>) -> NamedMap<String> {
    let mut links = forms.fill_all(PHONE_SOCIAL_TEMPLATES, None);
    if let Some(email) = email {
        for (name, template) in EMAIL_SOCIAL_TEMPLATES {
            links.insert(*name, forms.fill(template, Some(email)));
        }
    }
    links
}

pub fn email_patterns(forms: &NumberForms) -> NamedMap<String> {
    let mut patterns = NamedMap::new();

    for provider in EMAIL_PROVIDERS {
        patterns.insert(
            format!("full_phone_{}", provider),
            format!("{}@{}", forms.clean, provider),
        );
        patterns.insert(
            format!("short_phone_{}", provider),
            format!("{}@{}", forms.short, provider),
        );
        if forms.is_home_region() {
            patterns.insert(
                format!("phone{}_{}", forms.home_code, provider),
                format!("{}{}@{}", forms.home_code, forms.short, provider),
            );
        }
    }

    for (name, template) in REGIONAL_EMAIL_TEMPLATES {
        patterns.insert(*name, forms.fill(template, None));
    }

    patterns
}

/// Username guesses; home-code variants only apply to home-region numbers
pub fn username_patterns(forms: &NumberForms) -> NamedMap<String> {
    USERNAME_TEMPLATES
        .iter()
        .filter(|(name, _)| forms.is_home_region() || !name.contains("{code}"))
        .map(|(name, template)| (forms.fill(name, None), forms.fill(template, None)))
        .collect()
}

pub fn investigation_links(forms: &NumberForms, email: Option<&str>) -> NamedMap<String> {
    let mut links = forms.fill_all(PHONE_SEARCH_TEMPLATES, None);
    if email.is_some() {
        for (name, template) in EMAIL_SEARCH_TEMPLATES {
            links.insert(*name, forms.fill(template, email));
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indian_target() -> PhoneTarget {
        PhoneTarget::validate("+91 98765 43210").unwrap()
    }

    #[test]
    fn test_number_forms_strip_home_code() {
        let forms = NumberForms::new(&indian_target(), DEFAULT_HOME_CALLING_CODE);
        assert_eq!(forms.clean, "919876543210");
        assert_eq!(forms.short, "9876543210");
        assert!(forms.is_home_region());
    }

    #[test]
    fn test_number_forms_outside_home_region() {
        let target = PhoneTarget::validate("+1-202-555-0123").unwrap();
        let forms = NumberForms::new(&target, DEFAULT_HOME_CALLING_CODE);
        assert_eq!(forms.short, forms.clean);
        assert!(!forms.is_home_region());

        let forms = NumberForms::new(&target, "1");
        assert_eq!(forms.short, "2025550123");
        assert!(forms.is_home_region());
    }

    #[test]
    fn test_home_code_matches_whole_calling_code() {
        // "9" is a prefix of "91" but not India's calling code
        let forms = NumberForms::new(&indian_target(), "9");
        assert!(!forms.is_home_region());
        assert_eq!(forms.short, "919876543210");
    }

    #[test]
    fn test_foreign_number_gets_no_home_code_guesses() {
        let target = PhoneTarget::validate("+1-202-555-0123").unwrap();
        let bundle = generate(&target, None, DEFAULT_HOME_CALLING_CODE);

        assert!(!bundle.email_patterns.keys().any(|name| name.starts_with("phone91_")));
        assert!(!bundle.email_patterns.iter().any(|(_, email)| email.starts_with("9112025550123")));
        assert_eq!(bundle.email_patterns.len(), EMAIL_PROVIDERS.len() * 2 + 3);
        assert!(!bundle.username_patterns.contains_key("phone_with_91"));
        assert_eq!(
            bundle.username_patterns.get("short_phone").map(String::as_str),
            Some("12025550123")
        );
    }

    #[test]
    fn test_email_patterns_for_indian_number() {
        let bundle = generate(&indian_target(), None, DEFAULT_HOME_CALLING_CODE);
        let patterns = &bundle.email_patterns;

        assert_eq!(
            patterns.get("full_phone_gmail.com").map(String::as_str),
            Some("919876543210@gmail.com")
        );
        assert_eq!(
            patterns.get("short_phone_gmail.com").map(String::as_str),
            Some("9876543210@gmail.com")
        );
        assert_eq!(
            patterns.get("phone91_icloud.com").map(String::as_str),
            Some("919876543210@icloud.com")
        );
        assert_eq!(
            patterns.get("jio_pattern").map(String::as_str),
            Some("9876543210@jio.com")
        );
        // three forms per provider plus the regional carrier patterns
        assert_eq!(patterns.len(), EMAIL_PROVIDERS.len() * 3 + 3);
    }

    #[test]
    fn test_social_links_without_email() {
        let bundle = generate(&indian_target(), None, DEFAULT_HOME_CALLING_CODE);
        let links = &bundle.social_links;

        assert_eq!(links.len(), PHONE_SOCIAL_TEMPLATES.len());
        assert_eq!(
            links.get("WhatsApp").map(String::as_str),
            Some("https://wa.me/919876543210")
        );
        assert_eq!(
            links.get("Truecaller").map(String::as_str),
            Some("https://www.truecaller.com/search/in/9876543210")
        );
        assert!(!links.contains_key("Gravatar"));
        assert!(!bundle.investigation_links.contains_key("google_search_email"));
        assert_eq!(
            bundle.investigation_links.get("linkedin_site_search").map(String::as_str),
            Some("https://www.google.com/search?q=site:linkedin.com+\"%2B919876543210\"")
        );
    }

    #[test]
    fn test_email_adds_links() {
        let bundle = generate(
            &indian_target(),
            Some("someone@example.com"),
            DEFAULT_HOME_CALLING_CODE,
        );

        assert_eq!(
            bundle.social_links.get("Gravatar").map(String::as_str),
            Some("https://en.gravatar.com/someone@example.com")
        );
        assert_eq!(
            bundle.investigation_links.get("google_search_email").map(String::as_str),
            Some("https://www.google.com/search?q=\"someone@example.com\"")
        );
        // phone-derived links come first
        assert_eq!(bundle.social_links.keys().next(), Some("Facebook"));
    }

    #[test]
    fn test_usernames_and_databases() {
        let bundle = generate(&indian_target(), None, DEFAULT_HOME_CALLING_CODE);

        let usernames: Vec<(&str, &str)> = bundle
            .username_patterns
            .iter()
            .map(|(name, value)| (name, value.as_str()))
            .collect();
        assert_eq!(
            usernames,
            vec![
                ("full_phone", "919876543210"),
                ("short_phone", "9876543210"),
                ("phone_with_91", "919876543210"),
                ("phone_jio", "jio9876543210"),
                ("phone_user", "user9876543210"),
                ("phone_mobile", "mobile9876543210"),
            ]
        );
        assert_eq!(
            bundle.public_databases.get("SyncMe").map(String::as_str),
            Some("https://sync.me/search/?number=9876543210")
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let target = indian_target();
        let first = generate(&target, Some("a@b.com"), DEFAULT_HOME_CALLING_CODE);
        let second = generate(&target, Some("a@b.com"), DEFAULT_HOME_CALLING_CODE);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
