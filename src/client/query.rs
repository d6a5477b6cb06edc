//! Query parameter builder for outgoing requests
//!
//! ```ignore
//! QueryBuilder::from_request(&request)
//!     .set_bool("jitEnabled", options.jit_enabled)
//!     .set_strings("enabledResolutions", &options.enabled_resolutions)
//!     .set_string("sourceLanguage", "en")
//!     .commit(&mut request);
//! ```
//!
//! Nothing reaches the request until [`QueryBuilder::commit`] is called.

use super::transport::ApiRequest;
use std::collections::BTreeMap;
use url::Url;

/// Accumulates query parameters and writes them onto a request in one step.
///
/// Setting a key replaces any value it already had, including values that
/// were present on the request URL. Parameters are written sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryBuilder {
    /// Start from an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the parameters already on the request URL
    pub fn from_request(request: &ApiRequest) -> Self {
        Self::from_url(&request.url)
    }

    /// Start from the parameters already on a URL
    pub fn from_url(url: &Url) -> Self {
        let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            values
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self { values }
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), vec![value]);
    }

    /// Set `key` to `"true"` or `"false"`; `None` leaves it alone
    pub fn set_bool(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
        self
    }

    /// Set `key` unless `value` is blank
    pub fn set_string(mut self, key: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.set(key, value.to_string());
        }
        self
    }

    /// Set `key` to the comma-joined values unless the list is empty
    pub fn set_strings<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.set(key, joined);
        }
        self
    }

    /// Current value of `key`, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Form-encoded query string, sorted by key
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.values {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Replace the query of `url` with the accumulated parameters
    pub fn apply_to_url(&self, url: &mut Url) {
        if self.values.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }

    /// Write the parameters onto the request URL. Calling this again with
    /// the same builder produces the same URL.
    pub fn commit(&self, request: &mut ApiRequest) {
        self.apply_to_url(&mut request.url);
    }
}
