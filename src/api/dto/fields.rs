//! Field-level validators shared by request DTOs.
//!
//! Messages follow the wording clients of this API already match on.

use std::borrow::Cow;

use serde_json::Value;
use validator::ValidationError;

pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const MIN_ZERO: &str = "Ensure this value is greater than or equal to 0.";

/// Largest value accepted for price and quantity.
pub const MAX_AMOUNT: i64 = 2_147_483_647;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Strips surrounding whitespace in place; values are stored trimmed.
pub fn trim(value: &mut Option<String>) {
    if let Some(s) = value {
        let trimmed = s.trim();
        if trimmed.len() != s.len() {
            *s = trimmed.to_string();
        }
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", BLANK));
    }
    Ok(())
}

/// Reads an integer from a JSON number or a numeric string.
///
/// Floats are accepted only when they have no fractional part.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts integers in `0..=MAX_AMOUNT`.
pub fn amount(value: &Value) -> Result<(), ValidationError> {
    let Some(n) = parse_integer(value) else {
        return Err(error("invalid", INVALID_INTEGER));
    };

    if n < 0 {
        return Err(error("min_value", MIN_ZERO));
    }
    if n > MAX_AMOUNT {
        return Err(error(
            "max_value",
            format!("Ensure this value is less than or equal to {MAX_AMOUNT}."),
        ));
    }

    Ok(())
}

/// Parses a company reference; `null` means "not attached".
pub fn parse_reference(value: &Value) -> Result<Option<i64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(_) | Value::String(_) => parse_integer(value)
            .map(Some)
            .ok_or_else(|| error("incorrect_type", incorrect_type(value))),
        _ => Err(error("incorrect_type", incorrect_type(value))),
    }
}

fn incorrect_type(value: &Value) -> String {
    let received = match value {
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
        Value::Null => "null",
    };
    format!("Incorrect type. Expected pk value, received {received}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Valid").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_trim() {
        let mut value = Some("  A  ".to_string());
        trim(&mut value);
        assert_eq!(value.as_deref(), Some("A"));

        let mut value = None;
        trim(&mut value);
        assert!(value.is_none());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(&json!(42)), Some(42));
        assert_eq!(parse_integer(&json!("17")), Some(17));
        assert_eq!(parse_integer(&json!(5.0)), Some(5));
        assert_eq!(parse_integer(&json!(5.5)), None);
        assert_eq!(parse_integer(&json!("ten")), None);
        assert_eq!(parse_integer(&json!(true)), None);
    }

    #[test]
    fn test_amount_bounds() {
        assert!(amount(&json!(0)).is_ok());
        assert!(amount(&json!(MAX_AMOUNT)).is_ok());

        let err = amount(&json!(-1)).unwrap_err();
        assert_eq!(err.message.as_deref(), Some(MIN_ZERO));

        let err = amount(&json!(MAX_AMOUNT + 1)).unwrap_err();
        assert_eq!(err.code, "max_value");

        let err = amount(&json!("abc")).unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_INTEGER));
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference(&json!(null)).unwrap(), None);
        assert_eq!(parse_reference(&json!(3)).unwrap(), Some(3));
        assert_eq!(parse_reference(&json!("3")).unwrap(), Some(3));

        let err = parse_reference(&json!({ "id": 3 })).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Incorrect type. Expected pk value, received dict.")
        );
    }
}
