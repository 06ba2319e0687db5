use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod error;
pub mod fields;
pub mod provider;

pub use error::FormatError;
pub use provider::SemanticDataProvider;

/// Bounds applied to a generated value.
///
/// How the bounds are read depends on the [`FormatFamily`] of the format:
/// serialized length for length-bound formats, `min` as a unit count for
/// count-bound formats, and nothing at all for shape-fixed formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthConstraint {
    min: usize,
    max: usize,
}

impl LengthConstraint {
    /// Validates signed bounds as they arrive from a schema.
    pub fn new(min: i64, max: i64) -> Result<Self, FormatError> {
        if min < 0 || max < 0 || min > max {
            return Err(FormatError::InvalidLengthConstraint { min, max });
        }
        match (usize::try_from(min), usize::try_from(max)) {
            (Ok(min), Ok(max)) => Ok(Self { min, max }),
            _ => Err(FormatError::InvalidLengthConstraint { min, max }),
        }
    }

    pub fn exact(len: usize) -> Self {
        Self { min: len, max: len }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// How a format interprets its [`LengthConstraint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatFamily {
    /// Layout is fully determined by the format; bounds are ignored
    ShapeFixed,
    /// Serialized length must land in `[min, max]`
    LengthBound,
    /// `min` is a unit count; `max` is ignored
    CountBound,
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ShapeFixed => "shape_fixed",
            Self::LengthBound => "length_bound",
            Self::CountBound => "count_bound",
        };
        f.write_str(name)
    }
}

/// Vocabulary pool used by the semantic data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    FrFr,
    #[default]
    ZhCn,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::FrFr, Locale::ZhCn, Locale::ZhTw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::FrFr => "fr_fr",
            Self::ZhCn => "zh_cn",
            Self::ZhTw => "zh_tw",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown locale '{}', expected one of: en, fr_fr, zh_cn, zh_tw",
                    s
                )
            })
    }
}
