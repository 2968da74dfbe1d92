use chrono::{DateTime, Local};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::osint::{InvestigationBundle, LookupResult};
use crate::phone::PhoneMetadata;

/// Insertion-ordered string-keyed map.
///
/// Report sections list entries in the order they were generated, so this
/// serializes as a JSON object that keeps that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for NamedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> NamedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for NamedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for NamedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = NamedMap::new();
        map.extend(iter);
        map
    }
}

impl<V: Serialize> Serialize for NamedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Who was investigated
#[derive(Debug, Clone, Serialize)]
pub struct ScanTarget {
    pub phone: String,
    pub validated_format: String,
    pub email: Option<String>,
}

/// Everything one scan produced, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct ScanResults {
    pub generated_at: DateTime<Local>,
    pub target: ScanTarget,
    pub basic_info: PhoneMetadata,
    pub lookup: LookupResult,
    pub bundle: InvestigationBundle,
}

#[cfg(test)]
pub(crate) fn sample_results(email: Option<&str>) -> ScanResults {
    use crate::osint::collector::PHONE_BREACH_HINT;
    use crate::osint::patterns::{generate, DEFAULT_HOME_CALLING_CODE};
    use crate::osint::sources::NO_API_KEY;
    use crate::osint::ProviderOutcome;
    use crate::phone::{describe, PhoneTarget};

    let target = PhoneTarget::validate("+91 98765 43210").unwrap();
    let mut lookup = LookupResult::default();
    lookup.reverse_lookup.insert("numverify", ProviderOutcome::skipped(NO_API_KEY));
    lookup.breaches.insert("phone_breach_info", ProviderOutcome::notice(PHONE_BREACH_HINT));

    ScanResults {
        generated_at: Local::now(),
        target: ScanTarget {
            phone: target.raw().to_string(),
            validated_format: target.e164().to_string(),
            email: email.map(str::to_string),
        },
        basic_info: describe(&target),
        lookup,
        bundle: generate(&target, email, DEFAULT_HOME_CALLING_CODE),
    }
}
