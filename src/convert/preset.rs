use super::{CaseBoundaries, Convention, Mode, Profile, Separators};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named converter configurations.
///
/// `Camel`, `Kebab` and `Dot` are the canonical conventions. The others keep
/// the exact behavior of older converters that split on fewer separators or
/// skip case boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Camel,
    #[default]
    Kebab,
    Dot,
    CamelBasic,
    CamelSimple,
    CamelStrict,
    KebabLegacy,
    KebabStrict,
    DotStrict,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Camel,
            Preset::Kebab,
            Preset::Dot,
            Preset::CamelBasic,
            Preset::CamelSimple,
            Preset::CamelStrict,
            Preset::KebabLegacy,
            Preset::KebabStrict,
            Preset::DotStrict,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Camel => "camel",
            Preset::Kebab => "kebab",
            Preset::Dot => "dot",
            Preset::CamelBasic => "camel-basic",
            Preset::CamelSimple => "camel-simple",
            Preset::CamelStrict => "camel-strict",
            Preset::KebabLegacy => "kebab-legacy",
            Preset::KebabStrict => "kebab-strict",
            Preset::DotStrict => "dot-strict",
        }
    }

    pub fn default_mode(self) -> Mode {
        match self {
            Preset::CamelBasic | Preset::CamelSimple => Mode::Lenient,
            _ => Mode::Strict,
        }
    }

    /// The preset's profile, in its default mode.
    pub fn profile(self) -> Profile {
        use CaseBoundaries as B;
        use Convention as C;
        use Separators as S;

        let (convention, separators, boundaries, shortcuts) = match self {
            Preset::Camel => (C::Camel, S::NonAlphanumeric, B::Full, true),
            Preset::Kebab => (C::Kebab, S::NonAlphanumeric, B::Full, false),
            Preset::Dot => (C::Dot, S::NonAlphanumeric, B::Full, false),
            Preset::CamelBasic => (C::Camel, S::NonAlphanumeric, B::None, true),
            Preset::CamelSimple | Preset::CamelStrict => {
                (C::Camel, S::WhitespaceUnderscoreHyphen, B::None, false)
            }
            Preset::KebabLegacy => (C::Kebab, S::WhitespaceUnderscoreHyphen, B::LowerUpper, false),
            Preset::KebabStrict => (C::Kebab, S::WhitespaceUnderscoreHyphen, B::Full, false),
            Preset::DotStrict => (C::Dot, S::WhitespaceUnderscoreDotHyphen, B::Full, false),
        };

        Profile {
            convention,
            separators,
            boundaries,
            shortcuts,
            mode: self.default_mode(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Preset::all()
            .iter()
            .copied()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| format!("Unknown preset: {}", s))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
