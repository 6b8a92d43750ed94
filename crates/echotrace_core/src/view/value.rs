use serde::Serialize;
use serde_json::{Number, Value as JsonValue};

use crate::view::number::canonical_number;
use crate::view::{EchoError, Result};

/// JSON-shaped value of unknown schema, classified once at the JSON boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
	/// JSON `null` or an absent value.
	Null,
	/// String, number, or boolean leaf.
	Primitive(Primitive),
	/// Ordered, possibly empty list.
	Sequence(Vec<StructuredValue>),
	/// Ordered key/value entries with unique keys.
	Mapping(Vec<MappingEntry>),
}

/// Scalar leaf of a structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
	/// UTF-8 string, displayed verbatim.
	String(String),
	/// JSON number.
	Number(Number),
	/// Boolean scalar.
	Bool(bool),
}

/// One key/value pair of a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
	/// Entry key, unique within its mapping.
	pub key: String,
	/// Entry payload.
	pub value: StructuredValue,
}

impl Primitive {
	/// Canonical display text: strings verbatim, numbers and booleans in their standard form.
	pub fn canonical_text(&self) -> String {
		match self {
			Primitive::String(text) => text.clone(),
			Primitive::Number(number) => canonical_number(number),
			Primitive::Bool(flag) => flag.to_string(),
		}
	}
}

impl StructuredValue {
	/// Parse JSON bytes into a structured value.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
		let json: JsonValue = serde_json::from_slice(bytes).map_err(EchoError::MalformedBody)?;
		Ok(Self::from(json))
	}

	/// Parse JSON text into a structured value.
	pub fn from_json_str(text: &str) -> Result<Self> {
		Self::from_json_slice(text.as_bytes())
	}

	/// Build a structured value from any serializable type; struct fields keep declaration order.
	pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
		let json = serde_json::to_value(value).map_err(EchoError::Encode)?;
		Ok(Self::from(json))
	}

	/// Look up a mapping entry by key. Returns `None` for non-mappings.
	pub fn get(&self, key: &str) -> Option<&StructuredValue> {
		match self {
			StructuredValue::Mapping(entries) => entries.iter().find(|entry| entry.key == key).map(|entry| &entry.value),
			_ => None,
		}
	}
}

impl From<JsonValue> for StructuredValue {
	fn from(value: JsonValue) -> Self {
		match value {
			JsonValue::Null => StructuredValue::Null,
			JsonValue::Bool(flag) => StructuredValue::Primitive(Primitive::Bool(flag)),
			JsonValue::Number(number) => StructuredValue::Primitive(Primitive::Number(number)),
			JsonValue::String(text) => StructuredValue::Primitive(Primitive::String(text)),
			JsonValue::Array(items) => StructuredValue::Sequence(items.into_iter().map(StructuredValue::from).collect()),
			JsonValue::Object(map) => StructuredValue::Mapping(
				map.into_iter()
					.map(|(key, value)| MappingEntry {
						key,
						value: StructuredValue::from(value),
					})
					.collect(),
			),
		}
	}
}

impl From<Option<JsonValue>> for StructuredValue {
	fn from(value: Option<JsonValue>) -> Self {
		value.map_or(StructuredValue::Null, StructuredValue::from)
	}
}

impl From<&str> for StructuredValue {
	fn from(text: &str) -> Self {
		StructuredValue::Primitive(Primitive::String(text.to_owned()))
	}
}

#[cfg(test)]
mod tests;
