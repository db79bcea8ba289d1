//! Conversions between the camera's 0/1 flag convention and booleans, and the
//! numeric coercion applied to every XML leaf value.

use serde_json::{Number, Value};

/// Replaces `record[key]` with `true`/`false` when it is exactly the number 1 or 0.
/// Any other value, a missing key, or a non-object record is left alone.
pub fn number_to_boolean(record: &mut Value, key: &str) {
    let Some(slot) = record.as_object_mut().and_then(|map| map.get_mut(key)) else {
        return;
    };
    let flag = match slot {
        Value::Number(n) if n.as_f64() == Some(1.0) => true,
        Value::Number(n) if n.as_f64() == Some(0.0) => false,
        _ => return,
    };
    *slot = Value::Bool(flag);
}

/// Maps `true`/`false` to 1/0. Anything else becomes `default` when one is
/// supplied and passes through unchanged when it is not.
pub fn boolean_to_number(value: Value, default: Option<Value>) -> Value {
    match value {
        Value::Bool(b) => Value::from(u8::from(b)),
        other => default.unwrap_or(other),
    }
}

/// Converts trimmed text to a JSON number when the whole string is a plain
/// decimal (optional sign, digits, optional point). Exponent notation, hex and
/// the empty string stay strings.
pub fn parse_number(text: &str) -> Value {
    let trimmed = text.trim();
    if !is_plain_decimal(trimmed) {
        return Value::String(text.to_string());
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };

    if frac_part.bytes().all(|b| b == b'0') {
        let digits = match int_part.trim_start_matches(['+', '-']) {
            "" => "0",
            d => d,
        };
        let signed = if int_part.starts_with('-') {
            format!("-{digits}")
        } else {
            digits.to_string()
        };
        if let Ok(n) = signed.parse::<i64>() {
            // -0 collapses to 0
            return Value::from(if n == 0 { 0 } else { n });
        }
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}

fn is_plain_decimal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut digits = 0;
    let mut points = 0;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
