//! Request adapter for mapping HTTP requests to raw input.

use std::collections::HashMap;

use crate::value::RawValue;

use super::RequestInputs;

/// Adapter for converting framework-specific HTTP requests into raw input.
///
/// `RequestAdapter` is the primary integration point between web frameworks
/// and the normalizer. It holds the request method plus the three input
/// sources the normalizer reads from: query parameters, body parameters
/// and headers.
///
/// # Header names
///
/// Headers are matched case-insensitively. CGI-style server names are also
/// accepted, so `HTTP_USER_AGENT`, `user-agent` and `User-Agent` all address
/// the same header.
///
/// # Examples
///
/// ```
/// use effective_type::web::{RequestAdapter, RequestInputs};
/// use effective_type::RawValue;
///
/// // Building from raw parts (framework integration would use From<FrameworkRequest>)
/// let mut adapter = RequestAdapter::new("GET");
/// adapter.add_query_param("search", "user input");
/// adapter.add_header("User-Agent", "typeidentifier");
///
/// assert_eq!(adapter.query_param("search"), Some(RawValue::from("user input")));
/// assert_eq!(adapter.header("HTTP_USER_AGENT"), Some(RawValue::from("typeidentifier")));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Request method as received (e.g. `GET`)
    method: String,
    /// Query parameters from URL
    query_params: HashMap<String, RawValue>,
    /// Body/form parameters
    body_params: HashMap<String, RawValue>,
    /// Request headers, keyed by canonical name
    headers: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter for the given method.
    ///
    /// All input sources start empty. Use the `add_*` methods to populate them.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            query_params: HashMap::new(),
            body_params: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Adds a query parameter. A later value for the same name replaces the earlier one.
    pub fn add_query_param(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.query_params.insert(name.into(), value.into());
    }

    /// Adds a body (form) parameter. A later value for the same name replaces the earlier one.
    pub fn add_body_param(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.body_params.insert(name.into(), value.into());
    }

    /// Adds a header.
    pub fn add_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(canonical_header_name(name), value.into());
    }

    /// Returns the request method as received.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the raw query parameters.
    pub fn query_params(&self) -> &HashMap<String, RawValue> {
        &self.query_params
    }

    /// Returns the raw body parameters.
    pub fn body_params(&self) -> &HashMap<String, RawValue> {
        &self.body_params
    }
}

impl RequestInputs for RequestAdapter {
    fn query_param(&self, name: &str) -> Option<RawValue> {
        self.query_params.get(name).cloned()
    }

    fn body_param(&self, name: &str) -> Option<RawValue> {
        self.body_params.get(name).cloned()
    }

    fn header(&self, name: &str) -> Option<RawValue> {
        self.headers
            .get(&canonical_header_name(name))
            .map(|value| RawValue::String(value.clone()))
    }
}

/// Lowercases a header name and maps CGI server names (`HTTP_USER_AGENT`) to `user-agent`.
fn canonical_header_name(name: &str) -> String {
    if name.contains('_') {
        let lowered = name.to_ascii_lowercase().replace('_', "-");
        match lowered.strip_prefix("http-") {
            Some(stripped) => stripped.to_string(),
            None => lowered,
        }
    } else {
        name.to_ascii_lowercase()
    }
}
