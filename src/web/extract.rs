//! Extraction boundary trait for web integration.
//!
//! This module defines how raw request values reach the normalizer from
//! framework-specific request types.

use crate::value::RawValue;

/// Reads raw input out of a framework-specific request.
///
/// This trait is the boundary between web framework types and the
/// normalizer. Framework integrations implement it to expose:
/// - Query parameters (e.g., `?search=foo`)
/// - Body/form parameters
/// - Headers and server metadata (e.g., `User-Agent`)
///
/// Every method returns the value exactly as received, or `None` if the
/// request does not carry it. Implementations MUST NOT sanitize or coerce;
/// that is the normalizer's job.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use effective_type::web::RequestInputs;
/// use effective_type::{Normalizer, Options, RawValue, Value};
///
/// // Example framework-specific implementation
/// struct MyFrameworkRequest {
///     query: HashMap<String, String>,
/// }
///
/// impl RequestInputs for MyFrameworkRequest {
///     fn query_param(&self, name: &str) -> Option<RawValue> {
///         self.query.get(name).map(|v| RawValue::from(v.as_str()))
///     }
///
///     fn body_param(&self, _name: &str) -> Option<RawValue> {
///         None
///     }
///
///     fn header(&self, _name: &str) -> Option<RawValue> {
///         None
///     }
/// }
///
/// let mut query = HashMap::new();
/// query.insert("page".to_string(), "3".to_string());
/// let request = MyFrameworkRequest { query };
///
/// let page = Normalizer::new().normalize_from_query_source(&request, "page", Options::new());
/// assert_eq!(page, Value::Int(3));
/// ```
pub trait RequestInputs {
    /// Returns the query parameter `name`.
    fn query_param(&self, name: &str) -> Option<RawValue>;

    /// Returns the body (form) parameter `name`.
    fn body_param(&self, name: &str) -> Option<RawValue>;

    /// Returns the header or server metadata entry `name`.
    fn header(&self, name: &str) -> Option<RawValue>;
}
