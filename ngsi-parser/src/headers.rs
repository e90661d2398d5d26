//! Request header normalization.
//!
//! Context brokers scope v2 notifications with the `fiware-service` and
//! `fiware-servicepath` headers. Transports disagree on header casing, so
//! lookups here ignore ASCII case.

use std::collections::BTreeMap;

pub const FIWARE_SERVICE: &str = "fiware-service";
pub const FIWARE_SERVICE_PATH: &str = "fiware-servicepath";

/// Tenant used when `fiware-service` is missing or empty.
pub const DEFAULT_SERVICE: &str = "nd";
/// Tenant path used when `fiware-servicepath` is missing or empty.
pub const DEFAULT_SERVICE_PATH: &str = "/nd";

/// Header name to value map with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationHeaders(BTreeMap<String, String>);

impl NotificationHeaders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any value stored under the same name in
    /// any casing.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_ascii_lowercase(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the tenant scope, falling back to the defaults.
    #[must_use]
    pub fn tenant(&self) -> Tenant {
        Tenant {
            service: self.non_empty(FIWARE_SERVICE).unwrap_or(DEFAULT_SERVICE).to_string(),
            service_path: self
                .non_empty(FIWARE_SERVICE_PATH)
                .unwrap_or(DEFAULT_SERVICE_PATH)
                .to_string(),
        }
    }

    fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for NotificationHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

/// The tenant scope of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    /// `fiware-service`, or [`DEFAULT_SERVICE`].
    pub service: String,
    /// `fiware-servicepath`, or [`DEFAULT_SERVICE_PATH`].
    pub service_path: String,
}

impl Default for Tenant {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            service_path: DEFAULT_SERVICE_PATH.to_string(),
        }
    }
}

/// Normalizes raw header pairs into a [`Tenant`]. Never fails.
pub fn normalize_headers<K, V, I>(headers: I) -> Tenant
where
    K: AsRef<str>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    headers.into_iter().collect::<NotificationHeaders>().tenant()
}
