//! Integration tests for the web boundary.
//!
//! These tests drive the normalizer through request adapters and the JSON
//! entrypoint, the way an HTTP integration would.

use effective_type::web::{handle_request, RequestAdapter, RequestInputs};
use effective_type::{Error, Normalizer, Options, RawValue, Value};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn entrypoint_json(adapter: &RequestAdapter) -> serde_json::Value {
    let body = handle_request(adapter)
        .expect("supported method")
        .to_json()
        .expect("serializable response");
    serde_json::from_str(&body).expect("valid JSON")
}

#[test]
fn entrypoint_get_echoes_query_param() {
    init_tracing();

    let mut adapter = RequestAdapter::new("GET");
    adapter.add_query_param("param", "typeidentifierinputget");
    adapter.add_header("User-Agent", "typeidentifier");

    let response = entrypoint_json(&adapter);

    assert_eq!(response["agent"], "typeidentifier");
    assert_eq!(response["value"], "typeidentifierinputget");
    assert_eq!(response["is_valid"], true);
}

#[test]
fn entrypoint_post_echoes_body_param() {
    init_tracing();

    let mut adapter = RequestAdapter::new("POST");
    adapter.add_body_param("param", "typeidentifierinputpost");
    adapter.add_header("user-agent", "typeidentifier");

    let response = entrypoint_json(&adapter);

    assert_eq!(
        response,
        json!({"is_valid": true, "value": "typeidentifierinputpost", "agent": "typeidentifier"})
    );
}

#[test]
fn entrypoint_types_numeric_params() {
    init_tracing();

    let mut adapter = RequestAdapter::new("GET");
    adapter.add_query_param("param", "3.25");

    let response = entrypoint_json(&adapter);

    assert_eq!(response["value"], json!(3.25));
    assert_eq!(response["agent"], serde_json::Value::Null);
}

#[test]
fn entrypoint_echoes_normalized_collections() {
    init_tracing();

    let mut adapter = RequestAdapter::new("POST");
    adapter.add_body_param(
        "param",
        RawValue::from(json!({"ids": ["1", "2"], "flag": true, "name": "bob"})),
    );

    let response = entrypoint_json(&adapter);

    assert_eq!(
        response["value"],
        json!({"ids": [1, 2], "flag": true, "name": "bob"})
    );
}

#[test]
fn entrypoint_rejects_other_methods() {
    init_tracing();

    let adapter = RequestAdapter::new("PATCH");
    let err = handle_request(&adapter).unwrap_err();

    assert!(matches!(err, Error::UnsupportedMethod(ref m) if m == "PATCH"));
    assert!(err.to_string().contains("PATCH"));
}

#[test]
fn each_source_is_read_independently() {
    init_tracing();

    let mut adapter = RequestAdapter::new("GET");
    adapter.add_query_param("id", "7");
    adapter.add_body_param("id", "  seven  ");
    adapter.add_header("X-Request-Id", "42");

    let normalizer = Normalizer::new();
    let options = Options::new().with_trim(true);

    assert_eq!(normalizer.normalize_from_query_source(&adapter, "id", options), Value::Int(7));
    assert_eq!(
        normalizer.normalize_from_body_source(&adapter, "id", options),
        Value::String("seven".to_string())
    );
    assert_eq!(
        normalizer.normalize_from_header_source(&adapter, "HTTP_X_REQUEST_ID", options),
        Value::Int(42)
    );
    assert_eq!(
        normalizer.normalize_from_header_source(&adapter, "Accept", options),
        Value::Null
    );
}

#[test]
fn header_values_can_be_sanitized() {
    init_tracing();

    let mut adapter = RequestAdapter::new("GET");
    adapter.add_header("User-Agent", "<script>evil()</script>Mozilla/5.0");

    let options = Options::new()
        .with_force_string(true)
        .with_sanitize_html(true);
    let agent = Normalizer::new().normalize_from_header_source(&adapter, "User-Agent", options);

    assert_eq!(agent, Value::String("evilMozilla/5.0".to_string()));
}

#[test]
fn adapter_exposes_raw_values_unsanitized() {
    let mut adapter = RequestAdapter::new("POST");
    adapter.add_body_param("comment", "<b>raw</b>");

    // Extraction never sanitizes; only the normalizer does
    assert_eq!(adapter.body_param("comment"), Some(RawValue::from("<b>raw</b>")));
}
