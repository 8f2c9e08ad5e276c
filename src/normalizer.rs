use std::borrow::Cow;

use tracing::{trace, warn};

use crate::error::Error;
use crate::html;
use crate::numeric::{self, Numeral};
use crate::options::Options;
use crate::source::ParameterSource;
use crate::value::{RawValue, Value};
use crate::web::RequestInputs;

/// Default maximum nesting of keyed collections.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Whitespace removed by the `trim` option.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Forced float strings use exponent notation outside this magnitude range.
const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_FROM: f64 = 1e15;

/// Infers the effective primitive type of raw input and sanitizes it.
///
/// The normalizer holds no state besides its depth limit, so a single instance
/// can be shared freely between threads.
///
/// Type inference is a priority chain; the first matching rule wins:
///
/// 1. null stays null
/// 2. a keyed collection is normalized entry by entry, keeping keys and order
/// 3. a native boolean stays a boolean (unless `force_string`)
/// 4. a number, or a string spelling one, becomes an integer or float (unless `force_string`)
/// 5. anything else is rendered as a string and sanitized
///
/// Strings such as `"true"` are never coerced to booleans.
///
/// # Examples
///
/// ```
/// use effective_type::{Normalizer, Options, RawValue, Value};
///
/// let normalizer = Normalizer::new();
///
/// assert_eq!(normalizer.normalize(&RawValue::from("1"), Options::new()), Value::Int(1));
/// assert_eq!(normalizer.normalize(&RawValue::from("1.1"), Options::new()), Value::Float(1.1));
/// assert_eq!(
///     normalizer.normalize(&RawValue::from("1a"), Options::new()),
///     Value::String("1a".to_string())
/// );
/// assert_eq!(
///     normalizer.normalize(&RawValue::from("1"), Options::new().with_force_string(true)),
///     Value::String("1".to_string())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    max_depth: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Creates a normalizer with [`DEFAULT_MAX_DEPTH`].
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a normalizer accepting at most `max_depth` levels of nested collections.
    ///
    /// With a limit of `0` every collection is treated as too deep.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the configured nesting limit.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Normalizes `value`. Never fails.
    ///
    /// Collections nested deeper than the limit are replaced by [`Value::Null`]
    /// and a warning is logged. Use [`try_normalize`](Self::try_normalize) to
    /// reject such input instead.
    pub fn normalize(&self, value: &RawValue, options: Options) -> Value {
        self.walk(value, options, 0, false).unwrap_or(Value::Null)
    }

    /// Normalizes `value`, failing if collections nest deeper than the limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] when the input is nested too deeply.
    ///
    /// # Examples
    ///
    /// ```
    /// use effective_type::{Error, Normalizer, Options, RawValue};
    ///
    /// let nested = RawValue::map([("outer", RawValue::map([("inner", RawValue::from(1))]))]);
    ///
    /// assert!(Normalizer::with_max_depth(2).try_normalize(&nested, Options::new()).is_ok());
    /// assert!(matches!(
    ///     Normalizer::with_max_depth(1).try_normalize(&nested, Options::new()),
    ///     Err(Error::DepthExceeded { limit: 1 })
    /// ));
    /// ```
    pub fn try_normalize(&self, value: &RawValue, options: Options) -> Result<Value, Error> {
        self.walk(value, options, 0, true)
    }

    /// Looks up `needle` in `source` and normalizes the value found.
    ///
    /// A missing key yields [`Value::Null`] without normalizing anything.
    pub fn normalize_from_keyed_source<S>(&self, needle: &str, source: &S, options: Options) -> Value
    where
        S: ParameterSource + ?Sized,
    {
        match source.lookup(needle) {
            Some(raw) => self.normalize(raw, options),
            None => {
                trace!(needle, "key absent from source");
                Value::Null
            }
        }
    }

    /// Normalizes the query parameter `needle` of `request`.
    pub fn normalize_from_query_source<R>(&self, request: &R, needle: &str, options: Options) -> Value
    where
        R: RequestInputs + ?Sized,
    {
        self.normalize_extracted(request.query_param(needle), needle, options)
    }

    /// Normalizes the body (form) parameter `needle` of `request`.
    pub fn normalize_from_body_source<R>(&self, request: &R, needle: &str, options: Options) -> Value
    where
        R: RequestInputs + ?Sized,
    {
        self.normalize_extracted(request.body_param(needle), needle, options)
    }

    /// Normalizes the header `needle` of `request`.
    ///
    /// How header names are matched is up to the [`RequestInputs`] implementation.
    pub fn normalize_from_header_source<R>(&self, request: &R, needle: &str, options: Options) -> Value
    where
        R: RequestInputs + ?Sized,
    {
        self.normalize_extracted(request.header(needle), needle, options)
    }

    fn normalize_extracted(&self, raw: Option<RawValue>, needle: &str, options: Options) -> Value {
        match raw {
            Some(raw) => self.normalize(&raw, options),
            None => {
                trace!(needle, "input absent from request");
                Value::Null
            }
        }
    }

    fn walk(&self, value: &RawValue, options: Options, depth: usize, strict: bool) -> Result<Value, Error> {
        let entries = match value {
            RawValue::Null => return Ok(Value::Null),
            RawValue::Map(entries) => entries,
            scalar => return Ok(normalize_scalar(scalar, options)),
        };

        if depth >= self.max_depth {
            if strict {
                return Err(Error::DepthExceeded {
                    limit: self.max_depth,
                });
            }
            warn!(depth, limit = self.max_depth, "collection nested too deeply, dropping subtree");
            return Ok(Value::Null);
        }

        entries
            .iter()
            .map(|(key, child)| Ok((key.clone(), self.walk(child, options, depth + 1, strict)?)))
            .collect::<Result<Vec<_>, Error>>()
            .map(Value::Map)
    }
}

fn normalize_scalar(value: &RawValue, options: Options) -> Value {
    if !options.force_string {
        if let RawValue::Bool(flag) = value {
            trace!(branch = "bool", "normalized value");
            return Value::Bool(*flag);
        }
        if let Some(numeral) = numeral_of(value) {
            trace!(branch = "number", "normalized value");
            return match numeral {
                Numeral::Int(number) => Value::Int(number),
                Numeral::Float(number) => Value::Float(number),
            };
        }
    }

    if options.force_string || matches!(value, RawValue::String(_)) {
        if let Some(text) = string_form(value) {
            trace!(branch = "string", from = value.kind(), "normalized value");
            return Value::String(sanitize_string(&text, options));
        }
    }

    Value::Null
}

fn numeral_of(value: &RawValue) -> Option<Numeral> {
    match value {
        RawValue::Int(number) => Some(Numeral::Int(*number)),
        RawValue::Float(number) => Some(Numeral::Float(*number)),
        RawValue::String(text) => numeric::coerce(text),
        RawValue::Null | RawValue::Bool(_) | RawValue::Map(_) => None,
    }
}

/// Textual rendering used when a scalar is forced onto the string path.
fn string_form(value: &RawValue) -> Option<Cow<'_, str>> {
    match value {
        RawValue::String(text) => Some(Cow::Borrowed(text.as_str())),
        RawValue::Bool(true) => Some(Cow::Borrowed("1")),
        RawValue::Bool(false) => Some(Cow::Borrowed("")),
        RawValue::Int(number) => Some(Cow::Owned(number.to_string())),
        RawValue::Float(number) => Some(float_form(*number)),
        RawValue::Null | RawValue::Map(_) => None,
    }
}

fn float_form(number: f64) -> Cow<'static, str> {
    if number.is_nan() {
        Cow::Borrowed("NAN")
    } else if number.is_infinite() {
        Cow::Borrowed(if number > 0.0 { "INF" } else { "-INF" })
    } else if number != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&number.abs()) {
        Cow::Owned(exponent_form(number))
    } else {
        Cow::Owned(number.to_string())
    }
}

/// Renders `number` as `1.5E+20` / `1.0E-7`.
fn exponent_form(number: f64) -> String {
    let formatted = format!("{number:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let point = if mantissa.contains('.') { "" } else { ".0" };
    let sign = if exponent.starts_with('-') { "" } else { "+" };
    format!("{mantissa}{point}E{sign}{exponent}")
}

fn sanitize_string(text: &str, options: Options) -> String {
    let sanitized = if options.sanitize_html {
        html::sanitize(text)
    } else {
        text.to_string()
    };

    if options.trim {
        sanitized.trim_matches(TRIM_CHARS).to_string()
    } else {
        sanitized
    }
}
