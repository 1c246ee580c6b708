use serde::{Deserialize, Serialize};

/// Characters treated as explicit word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separators {
    /// Anything outside `[0-9A-Za-z]`
    NonAlphanumeric,
    /// Whitespace, `_` and `-`
    WhitespaceUnderscoreHyphen,
    /// Whitespace, `_`, `.` and `-`
    WhitespaceUnderscoreDotHyphen,
}

impl Separators {
    pub fn is_separator(self, ch: char) -> bool {
        match self {
            Separators::NonAlphanumeric => !ch.is_ascii_alphanumeric(),
            Separators::WhitespaceUnderscoreHyphen => ch.is_whitespace() || matches!(ch, '_' | '-'),
            Separators::WhitespaceUnderscoreDotHyphen => {
                ch.is_whitespace() || matches!(ch, '_' | '.' | '-')
            }
        }
    }

    pub fn contains_any(self, text: &str) -> bool {
        text.chars().any(|ch| self.is_separator(ch))
    }

    pub fn describe(self) -> &'static str {
        match self {
            Separators::NonAlphanumeric => "[^0-9A-Za-z]",
            Separators::WhitespaceUnderscoreHyphen => r"[\s_-]",
            Separators::WhitespaceUnderscoreDotHyphen => r"[\s_.-]",
        }
    }
}

/// Implicit word boundaries found inside a run of non-separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseBoundaries {
    None,
    /// `aB` only
    LowerUpper,
    /// `aB`, `1B` and the acronym split `XML|Http`
    Full,
}

impl CaseBoundaries {
    /// Whether a new word starts at `current`.
    fn starts_word(self, prev: char, current: char, next: Option<char>) -> bool {
        match self {
            CaseBoundaries::None => false,
            CaseBoundaries::LowerUpper => prev.is_ascii_lowercase() && current.is_ascii_uppercase(),
            CaseBoundaries::Full => {
                if !current.is_ascii_uppercase() {
                    return false;
                }
                if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
                    return true;
                }
                // Last capital of an all-caps run that opens a lowercase word.
                prev.is_ascii_uppercase()
                    && next.is_some_and(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
            }
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            CaseBoundaries::None => "none",
            CaseBoundaries::LowerUpper => "aB",
            CaseBoundaries::Full => "aB 1B ABc",
        }
    }
}

/// Split `text` into words.
///
/// Runs of separators collapse into a single boundary, then every segment is
/// split again at case transitions. Tokens borrow from `text` and keep their
/// original casing.
pub fn tokenize(text: &str, separators: Separators, boundaries: CaseBoundaries) -> Vec<&str> {
    let mut tokens = Vec::new();

    for segment in text
        .split(|ch: char| separators.is_separator(ch))
        .filter(|segment| !segment.is_empty())
    {
        split_case_boundaries(segment, boundaries, &mut tokens);
    }

    tokens
}

fn split_case_boundaries<'a>(segment: &'a str, boundaries: CaseBoundaries, tokens: &mut Vec<&'a str>) {
    if boundaries == CaseBoundaries::None {
        tokens.push(segment);
        return;
    }

    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, ch)| ch);

        if boundaries.starts_word(prev, current, next) {
            tokens.push(&segment[start..offset]);
            start = offset;
        }
    }

    tokens.push(&segment[start..]);
}
