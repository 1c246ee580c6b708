pub mod json;
pub mod plaintext;

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    PlainText,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => FileType::Json,
            _ => FileType::PlainText,
        }
    }
}

/// One value to convert, with the line (or array position) it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub value: Value,
    pub line: usize,
}

impl InputValue {
    pub fn text(text: impl Into<String>, line: usize) -> Self {
        Self {
            value: Value::String(text.into()),
            line,
        }
    }

    /// Human readable form of the value: strings verbatim, anything else as JSON.
    pub fn display(&self) -> String {
        match &self.value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Parse a file into the values it holds
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<InputValue>> {
    match FileType::from_path(path) {
        FileType::Json => json::parse(content),
        FileType::PlainText => Ok(plaintext::parse(content)),
    }
}
