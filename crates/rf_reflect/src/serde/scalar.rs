use serde_json::{Number, Value};

use crate::info::ScalarKind;
use crate::ops::{ScalarError, ScalarValue};
use crate::text::{narrow_to_wide, wide_to_narrow};

/// Name of the shape of a document node, used in error messages.
pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(number) if number.is_f64() => "a number",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extracts a scalar of `kind` out of a document leaf.
///
/// Wide text is read as narrow text and transcoded.
pub(crate) fn decode_scalar(
    kind: ScalarKind,
    value: &Value,
    target: &'static str,
) -> Result<ScalarValue, ScalarError> {
    let mismatch = || ScalarError::Mismatch {
        expected: kind.expected(),
        found: shape_of(value),
        target,
    };

    match (kind, value) {
        (ScalarKind::Bool, Value::Bool(value)) => Ok(ScalarValue::Bool(*value)),
        (ScalarKind::Int32 | ScalarKind::Int64, Value::Number(number)) => {
            if let Some(value) = number.as_i64() {
                Ok(ScalarValue::Int(value))
            } else if let Some(value) = number.as_u64() {
                Ok(ScalarValue::UInt(value))
            } else {
                Err(mismatch())
            }
        }
        (ScalarKind::Float32, Value::Number(number)) => {
            let Some(wide) = number.as_f64() else {
                return Err(mismatch());
            };
            let narrow = wide as f32;
            if narrow.is_finite() {
                Ok(ScalarValue::Float(narrow))
            } else {
                Err(ScalarError::OutOfRange {
                    value: number.to_string(),
                    target,
                })
            }
        }
        (ScalarKind::NarrowText, Value::String(text)) => Ok(ScalarValue::Narrow(text.clone())),
        (ScalarKind::WideText, Value::String(text)) => Ok(ScalarValue::Wide(narrow_to_wide(text))),
        _ => Err(mismatch()),
    }
}

/// Turns a scalar into a document leaf.
///
/// Wide text is transcoded to narrow text. Floats are written with the
/// shortest decimal that reads back as the same `f32`; non-finite floats
/// become `null`, which the reader skips so the field keeps its value.
pub(crate) fn encode_scalar(value: ScalarValue) -> Value {
    match value {
        ScalarValue::Bool(value) => Value::Bool(value),
        ScalarValue::Int(value) => Value::from(value),
        ScalarValue::UInt(value) => Value::from(value),
        ScalarValue::Float(value) => value
            .to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        ScalarValue::Narrow(text) => Value::String(text),
        ScalarValue::Wide(text) => Value::String(wide_to_narrow(&text)),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{decode_scalar, encode_scalar};
    use crate::info::ScalarKind;
    use crate::ops::{ScalarError, ScalarValue};
    use crate::text::WideString;

    #[test]
    fn integers_must_be_integral() {
        assert_eq!(
            decode_scalar(ScalarKind::Int32, &json!(-7), "i32"),
            Ok(ScalarValue::Int(-7))
        );
        assert_eq!(
            decode_scalar(ScalarKind::Int64, &json!(u64::MAX), "u64"),
            Ok(ScalarValue::UInt(u64::MAX))
        );
        assert_eq!(
            decode_scalar(ScalarKind::Int32, &json!(1.5), "i32"),
            Err(ScalarError::Mismatch {
                expected: "an integer",
                found: "a number",
                target: "i32",
            })
        );
    }

    #[test]
    fn float_overflow() {
        let err = decode_scalar(ScalarKind::Float32, &json!(1e300), "f32").unwrap_err();
        assert!(matches!(err, ScalarError::OutOfRange { target: "f32", .. }));
    }

    #[test]
    fn wide_text_is_transcoded() {
        assert_eq!(
            decode_scalar(ScalarKind::WideText, &json!("ключ"), "WideString"),
            Ok(ScalarValue::Wide(WideString::from("ключ")))
        );
        assert_eq!(
            encode_scalar(ScalarValue::Wide(WideString::from("ключ"))),
            json!("ключ")
        );
    }

    #[test]
    fn floats_use_shortest_decimal() {
        assert_eq!(encode_scalar(ScalarValue::Float(0.1)).to_string(), "0.1");
        assert_eq!(encode_scalar(ScalarValue::Float(-2.25)), json!(-2.25));
        assert_eq!(encode_scalar(ScalarValue::Float(f32::NAN)), Value::Null);
    }
}
