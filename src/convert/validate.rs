use crate::ConvertError;
use serde_json::Value;

/// A value handed to a converter.
///
/// Converters accept anything that turns into an `Input`, so callers holding
/// loosely typed data (JSON, optional fields) go through the same validation
/// as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Text(&'a str),
    /// null or undefined
    Missing,
    /// Any non-string value, named by its type
    Other(&'static str),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(Input::Missing, Input::Text)
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Input::Text(text),
            Value::Null => Input::Missing,
            other => Input::Other(type_name(other)),
        }
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check the input is a non-empty string and return it trimmed.
pub fn validate(input: Input<'_>) -> Result<&str, ConvertError> {
    let text = match input {
        Input::Text(text) => text,
        Input::Missing => return Err(ConvertError::InvalidInput { found: "null" }),
        Input::Other(found) => return Err(ConvertError::InvalidInput { found }),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    Ok(trimmed)
}
