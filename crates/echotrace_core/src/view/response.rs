use serde_json::Value as JsonValue;

use crate::view::{EchoError, Result, StructuredValue};

/// Whether a status code denotes a successful reply.
pub fn is_success(status: u16) -> bool {
	(200..300).contains(&status)
}

/// Split an analysis service reply into display data or an error.
///
/// Only successful replies become a [`StructuredValue`]. Rejected replies turn
/// into [`EchoError::Rejected`] so their payload is never rendered.
pub fn classify_response(status: u16, reason: &str, body: &[u8]) -> Result<StructuredValue> {
	classify_json(status, reason, body).map(StructuredValue::from)
}

/// Like [`classify_response`], keeping the parsed JSON for shape checks.
pub fn classify_json(status: u16, reason: &str, body: &[u8]) -> Result<JsonValue> {
	if is_success(status) {
		return serde_json::from_slice(body).map_err(EchoError::MalformedBody);
	}
	Err(EchoError::Rejected {
		status,
		message: error_message(status, reason, body),
	})
}

/// Human-readable message for a rejected reply.
///
/// Prefers the FastAPI-style `detail` field: a string is used as is, a list of
/// validation errors yields the first `msg`, anything else is shown as compact
/// JSON. Bodies without a usable `detail` are shown as compact JSON, and
/// non-JSON bodies fall back to `"<status> <reason>"`.
pub fn error_message(status: u16, reason: &str, body: &[u8]) -> String {
	let fallback = format!("{status} {reason}").trim_end().to_owned();
	let Ok(payload) = serde_json::from_slice::<JsonValue>(body) else {
		return fallback;
	};

	let message = match payload.get("detail") {
		Some(detail) if is_truthy(detail) => detail_message(detail),
		_ => serde_json::to_string(&payload).ok(),
	};
	message.unwrap_or(fallback)
}

fn detail_message(detail: &JsonValue) -> Option<String> {
	match detail {
		JsonValue::String(text) => Some(text.clone()),
		JsonValue::Array(items) if !items.is_empty() => match items[0].get("msg") {
			Some(JsonValue::String(msg)) if !msg.is_empty() => Some(msg.clone()),
			_ => serde_json::to_string(detail).ok(),
		},
		_ => serde_json::to_string(detail).ok(),
	}
}

fn is_truthy(value: &JsonValue) -> bool {
	match value {
		JsonValue::Null => false,
		JsonValue::Bool(flag) => *flag,
		JsonValue::Number(number) => number.as_f64().is_some_and(|item| item != 0.0),
		JsonValue::String(text) => !text.is_empty(),
		JsonValue::Array(_) | JsonValue::Object(_) => true,
	}
}

#[cfg(test)]
mod tests;
