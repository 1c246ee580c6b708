pub mod preset;
pub mod recase;
pub mod tokenizer;
pub mod validate;

pub use preset::Preset;
pub use recase::Convention;
pub use tokenizer::{CaseBoundaries, Separators};
pub use validate::Input;

use crate::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How invalid or empty input is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Invalid or empty input converts to `""`
    Lenient,
    /// Invalid or empty input is an error
    #[default]
    Strict,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Mode::Lenient),
            "strict" => Ok(Mode::Strict),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Lenient => write!(f, "lenient"),
            Mode::Strict => write!(f, "strict"),
        }
    }
}

/// Full configuration of one converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub convention: Convention,
    pub separators: Separators,
    pub boundaries: CaseBoundaries,
    /// Recase separator-free input without tokenizing it
    pub shortcuts: bool,
    pub mode: Mode,
}

impl Profile {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Preset::default().profile()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    profile: Profile,
}

impl Converter {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.profile())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Convert `input` under the profile's mode.
    ///
    /// A lenient converter never returns an error.
    pub fn convert<'a>(&self, input: impl Into<Input<'a>>) -> Result<String, ConvertError> {
        match self.convert_strict(input.into()) {
            Err(err) if self.profile.mode == Mode::Lenient => {
                debug!(%err, "lenient conversion falls back to empty output");
                Ok(String::new())
            }
            result => result,
        }
    }

    /// The token sequence `input` splits into, ignoring shortcuts.
    pub fn tokens<'a>(&self, input: &'a str) -> Vec<&'a str> {
        tokenizer::tokenize(input.trim(), self.profile.separators, self.profile.boundaries)
    }

    fn convert_strict(&self, input: Input<'_>) -> Result<String, ConvertError> {
        let text = validate::validate(input)?;
        let profile = &self.profile;

        if profile.shortcuts && !profile.separators.contains_any(text) {
            let split_acronyms = profile.boundaries == CaseBoundaries::Full;
            if let Some(output) = recase::shortcut(text, split_acronyms) {
                debug!(input = text, "no separators, taking shortcut");
                return Ok(output);
            }
        }

        let tokens = tokenizer::tokenize(text, profile.separators, profile.boundaries);
        debug!(input = text, ?tokens, "tokenized");
        if tokens.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        Ok(profile.convention.join(&tokens))
    }
}
