use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::ThresholdLevel;

pub const AA_LEVEL: &str = "AA (Minimum)";
pub const AAA_LEVEL: &str = "AAA (Enhanced)";

/// Named WCAG tiers the classifier reads.
///
/// Loaded once and treated as read-only. The editor ships its tiers as
/// `accessibilityContrast.levels` with ratios written as `"4.5:1"` strings;
/// [`ThresholdTable::from_json`] reads that shape directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    levels: Vec<ThresholdLevel>,
}

impl ThresholdTable {
    /// AA (Minimum) 4.5 / 3.0 and AAA (Enhanced) 7.0 / 4.5.
    pub fn wcag() -> Self {
        Self {
            levels: vec![
                ThresholdLevel::new(AA_LEVEL, 4.5, 3.0),
                ThresholdLevel::new(AAA_LEVEL, 7.0, 4.5),
            ],
        }
    }

    pub fn from_levels(levels: Vec<ThresholdLevel>) -> ConfigResult<Self> {
        for tier in &levels {
            check_floor(&tier.level, "normalText", tier.normal_text)?;
            check_floor(&tier.level, "largeText", tier.large_text)?;
            if tier.large_text > tier.normal_text {
                return Err(ConfigError::InvertedTier {
                    level: tier.level.clone(),
                    normal: tier.normal_text,
                    large: tier.large_text,
                });
            }
        }
        let aa = find_level(&levels, AA_LEVEL);
        let aaa = find_level(&levels, AAA_LEVEL);
        if let (Some(aa), Some(aaa)) = (aa, aaa) {
            check_order("normalText", aa.normal_text, aaa.normal_text)?;
            check_order("largeText", aa.large_text, aaa.large_text)?;
        }
        Ok(Self { levels })
    }

    /// Table for a caller that may or may not supply its own tiers.
    /// `None` is the built-in WCAG table.
    pub fn from_optional_levels(levels: Option<Vec<ThresholdLevel>>) -> ConfigResult<Self> {
        match levels {
            None => Ok(Self::wcag()),
            Some(levels) => Self::from_levels(levels),
        }
    }

    /// Accepts a bare array of levels, `{ "levels": [...] }`, or the whole
    /// color data document with an `accessibilityContrast` section.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let raw = match serde_json::from_str::<RawTable>(json)? {
            RawTable::Bare(levels) => levels,
            RawTable::Wrapped { levels } => levels,
            RawTable::Document {
                accessibility_contrast,
            } => accessibility_contrast.levels,
        };

        let levels = raw
            .into_iter()
            .map(|raw| -> ConfigResult<ThresholdLevel> {
                Ok(ThresholdLevel {
                    normal_text: parse_ratio(&raw.level, "normalText", &raw.normal_text)?,
                    large_text: parse_ratio(&raw.level, "largeText", &raw.large_text)?,
                    level: raw.level,
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Self::from_levels(levels)
    }

    pub fn levels(&self) -> &[ThresholdLevel] {
        &self.levels
    }

    pub fn get(&self, level: &str) -> Option<&ThresholdLevel> {
        find_level(&self.levels, level)
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::wcag()
    }
}

/// Process-wide WCAG table.
pub fn default_thresholds() -> &'static [ThresholdLevel] {
    static TABLE: OnceLock<ThresholdTable> = OnceLock::new();
    TABLE.get_or_init(ThresholdTable::wcag).levels()
}

fn find_level<'a>(levels: &'a [ThresholdLevel], name: &str) -> Option<&'a ThresholdLevel> {
    levels.iter().find(|tier| tier.level == name)
}

fn check_floor(level: &str, field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio {
            level: level.to_string(),
            field,
            value: value.to_string(),
        })
    }
}

fn check_order(field: &'static str, aa_floor: f64, aaa_floor: f64) -> ConfigResult<()> {
    if aaa_floor >= aa_floor {
        Ok(())
    } else {
        Err(ConfigError::TierOrder {
            lower: AA_LEVEL,
            higher: AAA_LEVEL,
            field,
            lower_floor: aa_floor,
            higher_floor: aaa_floor,
        })
    }
}

fn parse_ratio(level: &str, field: &'static str, raw: &RawRatio) -> ConfigResult<f64> {
    let invalid = |value: String| ConfigError::InvalidRatio {
        level: level.to_string(),
        field,
        value,
    };
    match raw {
        RawRatio::Number(n) => Ok(*n),
        RawRatio::Text(text) => {
            let trimmed = text.trim();
            let number = trimmed.strip_suffix(":1").unwrap_or(trimmed).trim();
            number.parse::<f64>().map_err(|_| invalid(text.clone()))
        }
    }
}

/// AA/AAA floors the classifier needs, pulled out of a table by tier name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TierFloors {
    pub aa_normal: f64,
    pub aa_large: f64,
    pub aaa_normal: f64,
}

impl TierFloors {
    pub const WCAG: Self = Self {
        aa_normal: 4.5,
        aa_large: 3.0,
        aaa_normal: 7.0,
    };

    /// Missing tiers fall back to the WCAG floors, bounded by whatever the
    /// table does supply. Floors are kept ordered (AA large <= AA normal <=
    /// AAA normal) so every ratio maps to exactly one rating.
    pub fn resolve(levels: &[ThresholdLevel]) -> Self {
        let aa = find_level(levels, AA_LEVEL);
        let aaa = find_level(levels, AAA_LEVEL);

        let (aa_normal, aa_large) = match (aa, aaa) {
            (Some(tier), _) => (tier.normal_text, tier.large_text),
            (None, aaa) => {
                tracing::warn!(tier = AA_LEVEL, "threshold tier missing; using WCAG floors");
                let ceiling = aaa.map_or(f64::INFINITY, |t| t.normal_text);
                (
                    Self::WCAG.aa_normal.min(ceiling),
                    Self::WCAG.aa_large.min(ceiling),
                )
            }
        };
        let aaa_normal = match aaa {
            Some(tier) => tier.normal_text,
            None => {
                tracing::warn!(tier = AAA_LEVEL, "threshold tier missing; using WCAG floors");
                Self::WCAG.aaa_normal.max(aa_normal)
            }
        };

        let floors = Self {
            aa_normal,
            aa_large: aa_large.min(aa_normal),
            aaa_normal: aaa_normal.max(aa_normal),
        };
        if floors.aa_large != aa_large || floors.aaa_normal != aaa_normal {
            tracing::warn!(?floors, "threshold tiers out of order; clamped");
        }
        floors
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTable {
    Bare(Vec<RawLevel>),
    Wrapped {
        levels: Vec<RawLevel>,
    },
    Document {
        #[serde(rename = "accessibilityContrast")]
        accessibility_contrast: RawSection,
    },
}

#[derive(Deserialize)]
struct RawSection {
    levels: Vec<RawLevel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLevel {
    level: String,
    normal_text: RawRatio,
    large_text: RawRatio,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRatio {
    Number(f64),
    Text(String),
}
