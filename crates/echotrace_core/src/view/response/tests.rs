use echotrace_testkit::fixture_bytes;

use crate::view::{EchoError, StructuredValue, classify_json, classify_response, error_message, is_success};

#[test]
fn success_range_is_2xx() {
	assert!(is_success(200));
	assert!(is_success(204));
	assert!(is_success(299));
	assert!(!is_success(199));
	assert!(!is_success(300));
	assert!(!is_success(422));
}

#[test]
fn success_body_becomes_structured_value() {
	let value = classify_response(200, "OK", br#"{"text": "hello"}"#).expect("success classifies");
	assert_eq!(value.get("text"), Some(&StructuredValue::from("hello")));
}

#[test]
fn malformed_success_body_is_an_error() {
	let err = classify_response(200, "OK", b"<html>").expect_err("non-json should fail");
	assert!(matches!(err, EchoError::MalformedBody(_)));
}

#[test]
fn string_detail_is_the_message() {
	let err = classify_response(404, "Not Found", &fixture_bytes("error_detail.json")).expect_err("404 should fail");
	let EchoError::Rejected { status, message } = err else {
		panic!("expected rejected");
	};
	assert_eq!(status, 404);
	assert_eq!(message, "Case not found");
}

#[test]
fn validation_detail_uses_first_msg() {
	assert_eq!(error_message(422, "Unprocessable Entity", &fixture_bytes("error_validation.json")), "field required");
}

#[test]
fn validation_detail_without_msg_is_compact_json() {
	let body = br#"{"detail": [{"loc": ["body"]}]}"#;
	assert_eq!(error_message(422, "Unprocessable Entity", body), r#"[{"loc":["body"]}]"#);
}

#[test]
fn object_and_empty_list_detail_are_compact_json() {
	assert_eq!(error_message(400, "Bad Request", br#"{"detail": {"code": 7, "why": "x"}}"#), r#"{"code":7,"why":"x"}"#);
	assert_eq!(error_message(400, "Bad Request", br#"{"detail": []}"#), "[]");
}

#[test]
fn falsy_or_missing_detail_shows_whole_body() {
	assert_eq!(error_message(500, "Internal Server Error", br#"{"error": "boom"}"#), r#"{"error":"boom"}"#);
	assert_eq!(error_message(500, "Internal Server Error", br#"{"detail": ""}"#), r#"{"detail":""}"#);
	assert_eq!(error_message(500, "Internal Server Error", br#"{"detail": null, "b": 1}"#), r#"{"detail":null,"b":1}"#);
}

#[test]
fn non_json_body_falls_back_to_status_line() {
	assert_eq!(error_message(502, "Bad Gateway", b"upstream timeout"), "502 Bad Gateway");
	assert_eq!(error_message(503, "", b""), "503");
}

#[test]
fn rejected_error_displays_message() {
	let err = classify_response(500, "Internal Server Error", br#"{"detail": "model crashed"}"#).expect_err("500 should fail");
	assert_eq!(err.to_string(), "model crashed");
}

#[test]
fn classify_json_keeps_raw_payload_for_success_only() {
	let json = classify_json(201, "Created", br#"{"id": "c1"}"#).expect("created classifies");
	assert_eq!(json["id"], "c1");
	assert!(classify_json(401, "Unauthorized", br#"{"id": "c1"}"#).is_err());
}
