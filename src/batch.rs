use crate::input::InputValue;
use crate::{BatchResult, Conversion, Converter, Mode, Preset};
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};

/// Converts whole files' worth of values with one profile.
pub struct BatchConverter {
    converter: Converter,
    ignore_patterns: Vec<Regex>,
}

impl BatchConverter {
    pub fn new(preset: Preset, mode: Mode, ignore_patterns: &[String]) -> Self {
        let converter = Converter::new(preset.profile().with_mode(mode));

        // Compile ignore patterns
        let mut compiled = Vec::new();
        for pattern in ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => compiled.push(re),
                Err(e) => warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern"),
            }
        }

        debug!(%preset, %mode, patterns = compiled.len(), "batch converter ready");

        Self {
            converter,
            ignore_patterns: compiled,
        }
    }

    pub fn run(&self, values: &[InputValue]) -> BatchResult {
        let records: Vec<Conversion> = values
            .par_iter()
            .map(|entry| self.convert_one(entry))
            .collect();

        let failed_count = records.iter().filter(|r| r.output.is_err()).count();

        BatchResult {
            converted_count: records.len() - failed_count,
            failed_count,
            records,
        }
    }

    fn convert_one(&self, entry: &InputValue) -> Conversion {
        let input = entry.display();

        if entry.value.is_string() && self.should_ignore(&input) {
            return Conversion {
                line: entry.line,
                output: Ok(input.clone()),
                input,
                ignored: true,
            };
        }

        let output = self.converter.convert(&entry.value);
        if let Err(err) = &output {
            debug!(line = entry.line, input = %input, "{}", err);
        }

        Conversion {
            line: entry.line,
            input,
            output,
            ignored: false,
        }
    }

    fn should_ignore(&self, text: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(text))
    }
}
