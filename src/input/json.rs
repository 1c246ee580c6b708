use crate::input::InputValue;
use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a JSON document. A top-level array yields one value per element,
/// numbered from 1; any other document is a single value.
pub fn parse(content: &str) -> Result<Vec<InputValue>> {
    let document: Value = serde_json::from_str(content).context("Failed to parse JSON input")?;

    let values = match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, value)| InputValue {
                value,
                line: index + 1,
            })
            .collect(),
        value => vec![InputValue { value, line: 1 }],
    };

    Ok(values)
}
