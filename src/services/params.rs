use serde_json::Value;

use crate::errors::AppError;

/// A required field and the fixed error pair reported when it is absent.
pub(super) struct Field {
    pub name: &'static str,
    pub message: &'static str,
}

impl Field {
    fn missing(&self) -> AppError {
        AppError::bad_request(format!("Param {} is required", self.name), self.message)
    }

    fn invalid(&self, message: &str) -> AppError {
        AppError::bad_request(format!("Param {} is invalid", self.name), message)
    }
}

/// Non-blank text; the value is passed on untrimmed.
pub(super) fn required_text(value: Option<String>, field: &Field) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(field.missing()),
    }
}

pub(super) fn required_integer(value: Option<&Value>, field: &Field) -> Result<i64, AppError> {
    let value = match value {
        None | Some(Value::Null) => return Err(field.missing()),
        Some(Value::String(text)) if text.trim().is_empty() => return Err(field.missing()),
        Some(value) => value,
    };
    parse_integer(value).ok_or_else(|| field.invalid("App id must be an integer"))
}

pub(super) fn positive_integer(
    value: Option<&Value>,
    default: u32,
    field: &Field,
) -> Result<u32, AppError> {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return Ok(default);
    };
    parse_integer(value)
        .and_then(|parsed| u32::try_from(parsed).ok())
        .filter(|parsed| *parsed > 0)
        .ok_or_else(|| field.invalid(&format!("{} must be a positive integer", field.name)))
}

/// Strict integer coercion: JSON integers, integral floats and strings that
/// parse completely. Anything else is rejected rather than coerced.
pub(super) fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
