//! String formats registry.
//!
//! OpenAPI parameters may declare a `format` on top of their primitive type
//! (`uuid`, `date-time`, ...). Parameter writers receive a [`Registry`] so they
//! can check such values before putting them on a request.
//!
//! Format names are normalized the way swagger tooling does it: case, `-` and
//! `_` are ignored, so `date-time`, `DateTime` and `date_time` are the same format.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::RequestError;

/// Checks that a string conforms to a format.
pub type FormatValidator = fn(&str) -> bool;

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("a valid regex")
});

static MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$").expect("a valid regex")
});

const HOSTNAME_MAX_LENGTH: usize = 253;

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

fn is_date_time(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

fn is_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

fn is_byte(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}

fn is_hostname(value: &str) -> bool {
    value.len() <= HOSTNAME_MAX_LENGTH && HOSTNAME.is_match(value)
}

fn is_mac(value: &str) -> bool {
    MAC.is_match(value)
}

/// A set of named string formats.
///
/// [`Registry::default`] knows `uuid`, `date-time`, `date`, `ipv4`, `ipv6`,
/// `byte`, `hostname` and `mac`. Use [`Registry::empty`] to start from scratch.
///
/// # Example
///
/// ```rust
/// use orc8r_client::Registry;
///
/// let mut registry = Registry::default();
/// assert!(registry.validates("uuid", "0b3c1a2e-7f4d-4c55-9d71-1f2a3b4c5d6e"));
/// assert!(!registry.validates("DateTime", "yesterday"));
///
/// registry.add("network-id", |value| !value.is_empty() && value.is_ascii());
/// assert!(registry.contains("network_id"));
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    formats: IndexMap<String, FormatValidator>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.add("uuid", is_uuid);
        registry.add("date-time", is_date_time);
        registry.add("date", is_date);
        registry.add("ipv4", is_ipv4);
        registry.add("ipv6", is_ipv6);
        registry.add("byte", is_byte);
        registry.add("hostname", is_hostname);
        registry.add("mac", is_mac);
        registry
    }
}

impl Registry {
    /// A registry without any format.
    pub fn empty() -> Self {
        Self {
            formats: IndexMap::new(),
        }
    }

    /// Registers a format, returning the validator it replaced if any.
    pub fn add(&mut self, name: &str, validator: FormatValidator) -> Option<FormatValidator> {
        self.formats.insert(normalize(name), validator)
    }

    /// Removes a format. Returns `true` if it was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        self.formats.shift_remove(&normalize(name)).is_some()
    }

    /// Whether a format with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(&normalize(name))
    }

    /// Normalized names of the registered formats, in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    /// Checks a value against a format. Unknown formats never validate.
    pub fn validates(&self, format: &str, value: &str) -> bool {
        self.formats
            .get(&normalize(format))
            .is_some_and(|validator| validator(value))
    }

    /// Checks a parameter value, producing the error a request would report.
    ///
    /// Formats this registry does not know are left to the server and pass.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidFormat`] when a known format rejects the value.
    pub fn validate(
        &self,
        name: &str,
        location: &'static str,
        format: &str,
        value: &str,
    ) -> Result<(), RequestError> {
        let Some(validator) = self.formats.get(&normalize(format)) else {
            debug!(?name, ?format, "unknown format, leaving validation to the server");
            return Ok(());
        };
        if validator(value) {
            return Ok(());
        }
        Err(RequestError::InvalidFormat {
            name: name.to_string(),
            location,
            format: format.to_string(),
            value: value.to_string(),
        })
    }
}
