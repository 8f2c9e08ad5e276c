//! JSON entrypoint echoing a normalized request parameter.
//!
//! The handler reads one parameter from the request (query string for `GET`,
//! body for `POST`) together with the `User-Agent` header, normalizes both with
//! default options and reports them as
//!
//! ```text
//! {"is_valid": true, "value": <normalized param>, "agent": <normalized user agent>}
//! ```
//!
//! It exists to exercise the request boundary end to end without an actual
//! HTTP server.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::normalizer::Normalizer;
use crate::options::Options;
use crate::value::Value;

use super::RequestAdapter;

/// Name of the parameter the entrypoint echoes.
pub const PARAM_NAME: &str = "param";

/// Header reported as `agent`.
pub const AGENT_HEADER: &str = "User-Agent";

/// Request methods the entrypoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read the parameter from the query string
    Get,
    /// Read the parameter from the body
    Post,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        if method.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if method.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(Error::UnsupportedMethod(method.to_string()))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Body returned by [`handle_request`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrypointResponse {
    /// Always `true` for a served request
    pub is_valid: bool,
    /// The normalized parameter, `null` if absent
    pub value: Value,
    /// The normalized `User-Agent` header, `null` if absent
    pub agent: Value,
}

impl EntrypointResponse {
    /// Serializes the response as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Handles a request the way the test entrypoint does.
///
/// # Errors
///
/// Returns [`Error::UnsupportedMethod`] for anything but `GET` and `POST`.
///
/// # Examples
///
/// ```
/// use effective_type::web::{handle_request, RequestAdapter};
/// use effective_type::Value;
///
/// let mut adapter = RequestAdapter::new("GET");
/// adapter.add_query_param("param", "typeidentifierinputget");
/// adapter.add_header("User-Agent", "typeidentifier");
///
/// let response = handle_request(&adapter).expect("GET is supported");
/// assert!(response.is_valid);
/// assert_eq!(response.value, Value::String("typeidentifierinputget".to_string()));
/// assert_eq!(response.agent, Value::String("typeidentifier".to_string()));
/// ```
pub fn handle_request(adapter: &RequestAdapter) -> Result<EntrypointResponse, Error> {
    let method: Method = adapter.method().parse()?;
    debug!(%method, "handling entrypoint request");

    let normalizer = Normalizer::new();
    let options = Options::default();

    let agent = normalizer.normalize_from_header_source(adapter, AGENT_HEADER, options);
    let value = match method {
        Method::Get => normalizer.normalize_from_query_source(adapter, PARAM_NAME, options),
        Method::Post => normalizer.normalize_from_body_source(adapter, PARAM_NAME, options),
    };

    Ok(EntrypointResponse {
        is_valid: true,
        value,
        agent,
    })
}
