use serde::de::IgnoredAny;
use serde_json::Value;

/// Whether `text` is syntactically valid JSON. The parsed document is discarded.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Shape check for an untyped item record.
///
/// Valid records are objects with a truthy `name`, a truthy `weight` that
/// coerces to a finite number `>= 1`, and a truthy `value` that coerces to
/// any finite number. Only `weight` is range-checked.
pub fn is_valid_item_record(record: &Value) -> bool {
    let Some(obj) = record.as_object() else {
        return false;
    };

    match obj.get("name") {
        Some(name) if is_truthy(name) => {}
        _ => return false,
    }

    match obj.get("weight").filter(|w| is_truthy(w)).and_then(coerce_number) {
        Some(weight) if weight.is_finite() && weight >= 1.0 => {}
        _ => return false,
    }

    matches!(
        obj.get("value").filter(|v| is_truthy(v)).and_then(coerce_number),
        Some(value) if value.is_finite()
    )
}

/// Loose truthiness: `null`, `false`, `0`, NaN and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose numeric coercion. `None` means the value is not a number.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_str(s),
        Value::Array(items) => coerce_array(items),
        Value::Object(_) => None,
    }
}

// Arrays coerce through their string form: `[]` is "", `[x]` is x's string, more is "a,b".
fn coerce_array(items: &[Value]) -> Option<f64> {
    match items {
        [] => Some(0.0),
        [Value::Null] => Some(0.0),
        [Value::Number(n)] => n.as_f64(),
        [Value::String(s)] => coerce_str(s),
        [Value::Array(inner)] => coerce_array(inner),
        _ => None,
    }
}

fn coerce_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // f64::from_str also takes "inf"/"nan", which are not numeric here
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}
