pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod input;

use thiserror::Error;

pub use batch::BatchConverter;
pub use config::Config;
pub use convert::{
    CaseBoundaries, Convention, Converter, Input, Mode, Preset, Profile, Separators,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input must be a non-null string, got {found}")]
    InvalidInput { found: &'static str },
    #[error("input contains no alphanumeric words")]
    EmptyInput,
}

/// Convert `input` to camelCase.
///
/// In [`Mode::Lenient`] this never fails: invalid or empty input yields `""`.
pub fn to_camel_case<'a>(input: impl Into<Input<'a>>, mode: Mode) -> Result<String, ConvertError> {
    Converter::new(Preset::Camel.profile().with_mode(mode)).convert(input)
}

/// Convert `input` to kebab-case.
///
/// In [`Mode::Lenient`] this never fails: invalid or empty input yields `""`.
pub fn to_kebab_case<'a>(input: impl Into<Input<'a>>, mode: Mode) -> Result<String, ConvertError> {
    Converter::new(Preset::Kebab.profile().with_mode(mode)).convert(input)
}

/// Convert `input` to dot.case.
///
/// In [`Mode::Lenient`] this never fails: invalid or empty input yields `""`.
pub fn to_dot_case<'a>(input: impl Into<Input<'a>>, mode: Mode) -> Result<String, ConvertError> {
    Converter::new(Preset::Dot.profile().with_mode(mode)).convert(input)
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub converted_count: usize,
    pub failed_count: usize,
    pub records: Vec<Conversion>,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub line: usize,
    pub input: String,
    pub output: Result<String, ConvertError>,
    pub ignored: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_literals() {
        let cases = [
            ("firstName", "first-name"),
            ("user_id", "user-id"),
            ("SCREEN NAME", "screen-name"),
            ("mobile-number_ID", "mobile-number-id"),
            ("  multiple   spaces  ", "multiple-spaces"),
            ("XMLHttpRequest", "xml-http-request"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_kebab_case(input, Mode::Strict).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(to_kebab_case("---___   ", Mode::Strict), Err(ConvertError::EmptyInput));
        assert_eq!(to_kebab_case("---___   ", Mode::Lenient).unwrap(), "");
    }

    #[test]
    fn test_camel_literals() {
        let cases = [
            ("hello world", "helloWorld"),
            ("FOOBAR", "foobar"),
            ("PascalCase", "pascalCase"),
            ("alreadyCamelCase", "alreadyCamelCase"),
            ("XMLHttpRequest", "xmlHttpRequest"),
            ("SCREEN_NAME", "screenName"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_camel_case(input, Mode::Strict).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("XMLHttpRequest", Mode::Strict).unwrap(), "xml.http.request");
        assert_eq!(to_dot_case("user.first_name", Mode::Strict).unwrap(), "user.first.name");
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            to_kebab_case(Input::Missing, Mode::Strict),
            Err(ConvertError::InvalidInput { found: "null" })
        );
        assert_eq!(to_camel_case(Input::Missing, Mode::Lenient).unwrap(), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(to_dot_case(" \t\n ", Mode::Strict), Err(ConvertError::EmptyInput));
        assert_eq!(to_dot_case(" \t\n ", Mode::Lenient).unwrap(), "");
    }
}
