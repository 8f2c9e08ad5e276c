use std::fmt;

/// Errors that can occur while normalizing input or serving the entrypoint.
///
/// [`Normalizer::normalize`](crate::Normalizer::normalize) itself is total and
/// never returns an error; these are only surfaced by the strict
/// [`try_normalize`](crate::Normalizer::try_normalize) and by the web layer.
#[derive(Debug)]
pub enum Error {
    /// A keyed collection was nested deeper than the configured limit.
    DepthExceeded {
        /// The maximum nesting the normalizer was configured with
        limit: usize,
    },
    /// The entrypoint only serves `GET` and `POST`.
    UnsupportedMethod(String),
    /// Serializing a response to JSON failed.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DepthExceeded { limit } => {
                write!(f, "collection nesting exceeds maximum depth of {}", limit)
            }
            Error::UnsupportedMethod(method) => write!(f, "unsupported request method '{}'", method),
            Error::Json(err) => write!(f, "failed to serialize response: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
