//! Loose numeric coercion over JSON values.
//!
//! Backend payloads are inconsistent about types: weights arrive as numbers
//! or numeric strings, scores sometimes as `null`. These helpers never fail;
//! a value that cannot be read as a finite number yields `None` and the
//! caller picks the documented default.

use serde_json::Value;

/// Read a finite number from a JSON number or a numeric string.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Read a field of an object as a number.
pub fn field_number(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(as_number)
}

/// Read an array field.
pub fn field_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}

/// Sum every numeric element of a sequence; non-numeric entries count as 0.
pub fn sum_numbers(values: &[Value]) -> f64 {
    values.iter().filter_map(as_number).sum()
}

/// Round a ratio to an integer percentage in [0, 100].
///
/// `f64::round` rounds half away from zero.
pub fn percent(numerator: f64, denominator: f64) -> u8 {
    if denominator <= 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return 0;
    }
    clamp_percent(100.0 * numerator / denominator)
}

/// Round and clamp an already-scaled percentage.
pub fn clamp_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
