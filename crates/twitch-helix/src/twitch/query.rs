//! Query-string builder for Helix requests

use std::fmt::Display;

/// Ordered query parameters.
///
/// Unset optional values are skipped and list values repeat their key,
/// which is how Helix expects multiple IDs (`id=1&id=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single value
    pub fn push(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Adds a value if present
    pub fn push_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Adds one pair per list element
    pub fn push_all<S: AsRef<str>>(mut self, key: &'static str, values: &[S]) -> Self {
        self.pairs
            .extend(values.iter().map(|v| (key, v.as_ref().to_string())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the percent-encoded query string, without the leading `?`
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the query to a URL
    pub fn to_url(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, self.encode())
        }
    }
}
