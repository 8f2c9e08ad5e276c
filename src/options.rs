use serde::{Deserialize, Serialize};

/// Behavior flags applied by every normalization entry point.
///
/// All flags default to `false`. Any combination is legal; `force_string`
/// takes precedence over type inference.
///
/// Options can be built in code or read from a JSON configuration blob. Both
/// `snake_case` names and the camelCase spellings are accepted:
///
/// ```
/// use effective_type::Options;
///
/// let options = Options::new().with_trim(true).with_sanitize_html(true);
/// assert!(options.trim && options.sanitize_html && !options.force_string);
///
/// let parsed: Options = serde_json::from_str(r#"{"trim": true, "forceString": true}"#).unwrap();
/// assert_eq!(parsed, Options::new().with_trim(true).with_force_string(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Strip leading and trailing whitespace from string results
    pub trim: bool,
    /// Skip boolean and numeric inference and always produce a string
    #[serde(alias = "forceString")]
    pub force_string: bool,
    /// Strip tags, decode entities and delete denylisted characters
    #[serde(alias = "sanitizeHtml")]
    pub sanitize_html: bool,
}

impl Options {
    /// Creates options with every flag disabled.
    pub const fn new() -> Self {
        Self {
            trim: false,
            force_string: false,
            sanitize_html: false,
        }
    }

    /// Sets the `trim` flag.
    pub const fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets the `force_string` flag.
    pub const fn with_force_string(mut self, force_string: bool) -> Self {
        self.force_string = force_string;
        self
    }

    /// Sets the `sanitize_html` flag.
    pub const fn with_sanitize_html(mut self, sanitize_html: bool) -> Self {
        self.sanitize_html = sanitize_html;
        self
    }
}
