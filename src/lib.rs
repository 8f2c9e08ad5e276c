//! Effective primitive type inference and sanitization for untrusted input.
//!
//! Values arriving from outside (query strings, form bodies, headers, decoded
//! JSON) are loosely typed: `"1"` is usually an integer, `"1.1"` a float and
//! `"  alice "` a name with stray padding. This crate determines the type a
//! value effectively represents and hands it back re-typed and sanitized.
//!
//! # Core Types
//!
//! - [`RawValue`]: Input as received (null, bool, number, string or keyed collection)
//! - [`Value`]: Normalized output of the same shape
//! - [`Options`]: The `trim`, `force_string` and `sanitize_html` flags
//! - [`Normalizer`]: Stateless type inference and sanitization
//! - [`ParameterSource`]: Keyed lookup of raw values
//! - [`web::RequestInputs`]: Query, body and header extraction from requests
//!
//! # HTML sanitization
//!
//! With `sanitize_html` enabled, strings are stripped of tags, entity-decoded and
//! purged of the characters in [`HTML_DENYLIST`]. This is a best-effort denylist
//! and not a complete defense against cross-site scripting. Escape output for
//! the context it is rendered in.
//!
//! # Examples
//!
//! ```
//! use effective_type::{normalize, Options, RawValue, Value};
//!
//! assert_eq!(normalize(&RawValue::from("42"), Options::new()), Value::Int(42));
//! assert_eq!(normalize(&RawValue::from("true"), Options::new()), Value::String("true".into()));
//!
//! let html = r#"<p>Ciao <b>Stefano</b>! <script>alert("XSS");</script> &copy;</p>"#;
//! let options = Options::new().with_trim(true).with_force_string(true).with_sanitize_html(true);
//! assert_eq!(
//!     normalize(&RawValue::from(html), options),
//!     Value::String("Ciao Stefano! alertXSS; \u{a9}".into())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod html;
mod normalizer;
mod numeric;
mod options;
mod source;
mod value;
pub mod web;

pub use error::Error;
pub use html::DENYLIST as HTML_DENYLIST;
pub use normalizer::{Normalizer, DEFAULT_MAX_DEPTH};
pub use numeric::is_numeric;
pub use options::Options;
pub use source::ParameterSource;
pub use value::{Key, RawValue, Value};

/// Normalizes `value` with a default [`Normalizer`].
pub fn normalize(value: &RawValue, options: Options) -> Value {
    Normalizer::new().normalize(value, options)
}

/// Looks up `needle` in `source` and normalizes it with a default [`Normalizer`].
///
/// Returns [`Value::Null`] if the key is absent.
pub fn normalize_from_keyed_source<S>(needle: &str, source: &S, options: Options) -> Value
where
    S: ParameterSource + ?Sized,
{
    Normalizer::new().normalize_from_keyed_source(needle, source, options)
}
