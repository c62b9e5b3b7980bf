//! Normalizer — turns an arbitrary logged value into the single string a crash
//! sink accepts.
//!
//! Rules are applied in order, first match wins:
//!
//! | Input      | Output                                              |
//! |------------|-----------------------------------------------------|
//! | string     | `Error: <value>`                                    |
//! | number     | `Error code: <value>`                               |
//! | object     | `Error: <json>`, non-primitive fields pre-rendered  |
//! | other      | `Error: <json>`                                     |
//!
//! Numbers print the way JavaScript prints them, wherever they appear: `7.0`
//! renders as `7`, `1e16` as `10000000000000000`, `1e21` as `1e+21`.
//!
//! [`normalize`] is total. The only fallible step is turning a foreign
//! `Serialize` type into a [`Value`] first, see [`normalize_serialize`].

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::NormalizeError;
use crate::types::Severity;

/// Normalize a logged value into its descriptive string form.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::String(s) => format!("Error: {s}"),
        Value::Number(n) => format!("Error code: {}", js_number(n)),
        Value::Object(fields) => {
            let flattened: Map<String, Value> = fields
                .iter()
                .map(|(key, field)| (key.clone(), flatten_field(field)))
                .collect();
            format!("Error: {}", render_json(&Value::Object(flattened)))
        }
        other => format!("Error: {}", render_json(other)),
    }
}

/// Strings and numbers survive as-is; everything else is replaced by its
/// compact JSON rendering so the sink sees a flat record.
fn flatten_field(field: &Value) -> Value {
    match field {
        Value::String(_) | Value::Number(_) => field.clone(),
        other => Value::String(render_json(other)),
    }
}

/// Compact JSON with numbers in [`js_number`] form.
fn render_json(value: &Value) -> String {
    let mut out = String::new();
    write_json(value, &mut out);
    out
}

fn write_json(value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => out.push_str(&js_number(n)),
        Value::String(s) => write_json_str(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (i, (key, field)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_str(key, out);
                out.push(':');
                write_json(field, out);
            }
            out.push('}');
        }
        // null and booleans
        other => out.push_str(&other.to_string()),
    }
}

fn write_json_str(s: &str, out: &mut String) {
    out.push_str(&Value::from(s).to_string());
}

/// Render a number as JavaScript's `String(n)` does.
///
/// Integers print unchanged. Floats print in plain decimal for magnitudes in
/// `[1e-6, 1e21)`, without a trailing `.0`, and in exponent form otherwise
/// (`1e+21`, `1.5e-7`). Negative zero prints as `0`.
fn js_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(x) => js_float(x),
        None => n.to_string(),
    }
}

fn js_float(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&x.abs()) {
        return x.to_string();
    }
    let exponent = format!("{x:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

/// Serialize `value` into a [`Value`] and normalize it.
///
/// # Errors
///
/// Returns [`NormalizeError::Serialize`] when the value cannot be represented
/// as JSON (a failing `Serialize` impl, or a map keyed by a non-string type).
pub fn normalize_serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, NormalizeError> {
    let value = serde_json::to_value(value)?;
    Ok(normalize(&value))
}

/// Build the line sent to a crash sink: `"<code>: <normalized>"`.
pub fn tagged_line(severity: Severity, normalized: &str) -> String {
    format!("{}: {normalized}", severity.code())
}

/// Interpret a line of text as a logged value: JSON when it parses, otherwise
/// the text itself as a string.
pub fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
