use serde_json::Number;

/// Magnitude at and above which floats switch to exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero floats switch to exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Standard display text for a JSON number.
pub(crate) fn canonical_number(number: &Number) -> String {
	if let Some(value) = number.as_i64() {
		return value.to_string();
	}
	if let Some(value) = number.as_u64() {
		return value.to_string();
	}
	match number.as_f64() {
		Some(value) => canonical_float(value),
		None => number.to_string(),
	}
}

/// Shortest round-trip text for a float, integral values without a fraction.
pub(crate) fn canonical_float(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	// Also catches negative zero.
	if value == 0.0 {
		return "0".to_owned();
	}

	let magnitude = value.abs();
	if !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
		return exponent_form(value);
	}
	if value.fract() == 0.0 {
		return format!("{value:.0}");
	}
	format!("{value}")
}

fn exponent_form(value: f64) -> String {
	let raw = format!("{value:e}");
	match raw.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
		_ => raw,
	}
}
