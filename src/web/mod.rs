//! Web framework integration surface.
//!
//! This module provides the boundary between HTTP frameworks and the
//! normalizer. It handles:
//! - Reading raw values out of requests (query, body, headers)
//! - Serving a small JSON entrypoint that echoes a normalized parameter
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: This module contains no framework-specific code.
//!    It defines interfaces that framework-specific code can implement.
//!
//! 2. **Raw at Boundary**: Extraction hands values over exactly as received.
//!    Only the [`Normalizer`](crate::Normalizer) re-types and sanitizes them.
//!
//! 3. **Explicit Context**: No global request state. Everything flows through values.
//!
//! # Integration Model
//!
//! Framework-specific extractors should:
//! 1. Build a `RequestAdapter` from framework request types, or implement
//!    `RequestInputs` directly on them
//! 2. Call `Normalizer::normalize_from_query_source` and friends
//!
//! # Example Flow
//!
//! ```
//! use effective_type::web::RequestAdapter;
//! use effective_type::{Normalizer, Options, Value};
//!
//! let mut adapter = RequestAdapter::new("POST");
//! adapter.add_body_param("comment", "<b>hi</b> &amp; bye ");
//!
//! let options = Options::new().with_trim(true).with_sanitize_html(true);
//! let comment = Normalizer::new().normalize_from_body_source(&adapter, "comment", options);
//!
//! assert_eq!(comment, Value::String("hi  bye".to_string()));
//! ```

mod adapter;
mod entrypoint;
mod extract;

pub use adapter::RequestAdapter;
pub use entrypoint::{handle_request, EntrypointResponse, Method, AGENT_HEADER, PARAM_NAME};
pub use extract::RequestInputs;
