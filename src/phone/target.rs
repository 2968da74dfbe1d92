// src/phone/target.rs
use std::fmt;
use std::panic::{self, UnwindSafe};
use std::sync::Mutex;

use phonenumber::{Mode, PhoneNumber};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced while turning raw input into a usable phone number
#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("could not parse '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: phonenumber::ParseError,
    },

    #[error("'{input}' is not a valid phone number")]
    NotValid { input: String },

    #[error("no region metadata available for {number}")]
    MissingMetadata { number: String },
}

/// A phone number that passed full validation
#[derive(Debug, Clone)]
pub struct PhoneTarget {
    raw: String,
    number: PhoneNumber,
    e164: String,
}

impl PhoneTarget {
    /// Parse `raw` without a default region and require the number to be valid.
    ///
    /// Input must therefore carry its own country calling code (`+91...`,
    /// `+1-202-...`); national-only strings are rejected.
    pub fn validate(raw: &str) -> Result<Self, PhoneError> {
        // phonenumber panics on some malformed inputs
        let parsed = catch_quietly(|| phonenumber::parse(None, raw)).map_err(|_| {
            warn!("phone number parser panicked on {:?}", raw);
            PhoneError::NotValid {
                input: raw.to_string(),
            }
        })?;

        let number = parsed.map_err(|source| PhoneError::Parse {
            input: raw.to_string(),
            source,
        })?;

        if !phonenumber::is_valid(&number) {
            return Err(PhoneError::NotValid {
                input: raw.to_string(),
            });
        }

        let e164 = number.format().mode(Mode::E164).to_string();
        debug!("Validated {} as {}", raw, e164);

        Ok(Self {
            raw: raw.to_string(),
            number,
            e164,
        })
    }

    /// The string as the user typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Canonical E.164 form, e.g. `+919876543210`
    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Only validated numbers can be constructed.
    pub fn is_valid(&self) -> bool {
        true
    }

    /// E.164 digits without the leading `+` or any spaces
    pub fn clean_digits(&self) -> String {
        self.e164.replace(['+', ' '], "")
    }
}

/// Serializes panic hook swaps so concurrent parses restore the right hook
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// `catch_unwind` without the default hook printing the panic to stderr
fn catch_quietly<T>(f: impl FnOnce() -> T + UnwindSafe) -> std::thread::Result<T> {
    let _guard = HOOK_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(f);
    panic::set_hook(previous);

    result
}

impl fmt::Display for PhoneTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

/// Validate a raw phone number string, returning its E.164 form.
pub fn validate(raw: &str) -> Result<String, PhoneError> {
    PhoneTarget::validate(raw).map(|target| target.e164)
}
