use serde::Serialize;
use serde_json::json;

use crate::view::{EchoError, MappingEntry, Primitive, StructuredValue};

#[test]
fn mapping_keeps_source_key_order() {
	let value = StructuredValue::from_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).expect("json parses");
	let StructuredValue::Mapping(entries) = value else {
		panic!("expected mapping");
	};
	let keys: Vec<&str> = entries.iter().map(|entry| entry.key.as_str()).collect();
	assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn empty_array_is_sequence_not_mapping() {
	assert_eq!(StructuredValue::from(json!([])), StructuredValue::Sequence(Vec::new()));
	assert_eq!(StructuredValue::from(json!({})), StructuredValue::Mapping(Vec::new()));
}

#[test]
fn numeric_string_keys_stay_a_mapping() {
	let value = StructuredValue::from(json!({"0": "a", "1": "b"}));
	assert!(matches!(value, StructuredValue::Mapping(_)));
	assert_eq!(value.get("1"), Some(&StructuredValue::from("b")));
}

#[test]
fn absent_value_classifies_as_null() {
	assert_eq!(StructuredValue::from(None::<serde_json::Value>), StructuredValue::Null);
	assert_eq!(StructuredValue::from(Some(json!(null))), StructuredValue::Null);
	assert_eq!(StructuredValue::from(Some(json!(false))), StructuredValue::Primitive(Primitive::Bool(false)));
}

#[test]
fn primitive_canonical_text() {
	assert_eq!(Primitive::String("44100".into()).canonical_text(), "44100");
	assert_eq!(Primitive::Bool(true).canonical_text(), "true");
	let StructuredValue::Primitive(number) = StructuredValue::from(json!(1.5)) else {
		panic!("expected primitive");
	};
	assert_eq!(number.canonical_text(), "1.5");
}

#[test]
fn serializable_struct_keeps_field_order() {
	#[derive(Serialize)]
	struct Segment {
		speaker: &'static str,
		start: f64,
		end: f64,
	}

	let value = StructuredValue::from_serialize(&Segment {
		speaker: "A",
		start: 0.0,
		end: 1.5,
	})
	.expect("segment serializes");

	let StructuredValue::Mapping(entries) = value else {
		panic!("expected mapping");
	};
	assert_eq!(
		entries.first(),
		Some(&MappingEntry {
			key: "speaker".into(),
			value: StructuredValue::from("A"),
		})
	);
	let keys: Vec<&str> = entries.iter().map(|entry| entry.key.as_str()).collect();
	assert_eq!(keys, ["speaker", "start", "end"]);
}

#[test]
fn invalid_json_is_malformed_body() {
	let err = StructuredValue::from_json_str("{not json").expect_err("invalid json should fail");
	assert!(matches!(err, EchoError::MalformedBody(_)));
}
