use serde::{Deserialize, Serialize};
use std::fmt;

/// Target casing and joining rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Camel,
    Kebab,
    Dot,
}

impl Convention {
    pub fn connector(self) -> &'static str {
        match self {
            Convention::Camel => "",
            Convention::Kebab => "-",
            Convention::Dot => ".",
        }
    }

    /// Recase every token and join them with the connector.
    pub fn join(self, tokens: &[&str]) -> String {
        let capacity = tokens.iter().map(|token| token.len() + 1).sum();
        let mut out = String::with_capacity(capacity);

        for (index, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            if index == 0 {
                out.push_str(&lower);
                continue;
            }

            out.push_str(self.connector());
            match self {
                Convention::Camel => out.push_str(&capitalize(&lower)),
                Convention::Kebab | Convention::Dot => out.push_str(&lower),
            }
        }

        out
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Camel => write!(f, "camelCase"),
            Convention::Kebab => write!(f, "kebab-case"),
            Convention::Dot => write!(f, "dot.case"),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Recase a trimmed input that has no separators without tokenizing it.
///
/// All-caps words are lowercased whole, a single capitalized word has its
/// first char lowered and anything else is returned as is. With
/// `split_acronyms`, input that opens with an all-caps run (`XMLHttp`) is not
/// a single word and yields `None` so the caller tokenizes it.
pub fn shortcut(text: &str, split_acronyms: bool) -> Option<String> {
    if text.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
        return Some(text.to_ascii_lowercase());
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            if split_acronyms && chars.clone().next().is_some_and(|ch| ch.is_ascii_uppercase()) {
                return None;
            }
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            Some(out)
        }
        _ => Some(text.to_string()),
    }
}
