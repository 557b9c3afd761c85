use std::fmt;

use serde::Serialize;

use crate::error::{ColorError, ColorResult};

/// An opaque sRGB color with 8-bit channels.
///
/// Only produced by the hex parser or by code that already holds valid
/// channel values, so every `Color` is a legal contrast input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide channel values, as handed over by callers
    /// that cannot express `u8` (JS numbers).
    pub fn from_channels(r: u32, g: u32, b: u32) -> ColorResult<Self> {
        let narrow = |channel: &'static str, value: u32| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
        };
        Ok(Self::new(narrow("r", r)?, narrow("g", g)?, narrow("b", b)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A named accessibility tier, e.g. "AA (Minimum)" with floors 4.5 / 3.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdLevel {
    pub level: String,
    /// Minimum ratio for normal-size text.
    pub normal_text: f64,
    /// Minimum ratio for large text (18pt, or 14pt bold).
    pub large_text: f64,
}

impl ThresholdLevel {
    pub fn new(level: impl Into<String>, normal_text: f64, large_text: f64) -> Self {
        Self {
            level: level.into(),
            normal_text,
            large_text,
        }
    }
}

/// Qualitative label shown next to the ratio in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContrastRating {
    /// Passes AAA for normal text.
    Excellent,
    /// Passes AA for normal text.
    Good,
    /// Only readable as large text.
    Poor,
    Fail,
}

impl ContrastRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastRating::Excellent => "Excellent",
            ContrastRating::Good => "Good",
            ContrastRating::Poor => "Poor",
            ContrastRating::Fail => "Fail",
        }
    }
}

impl fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass flags for one tier of the threshold table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierResult {
    pub level: String,
    pub pass_normal: bool,
    pub pass_large: bool,
}

/// Result of evaluating one color pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// Unrounded WCAG ratio, always >= 1.0.
    pub ratio: f64,
    /// Set when the pair misses AA for normal text; drives the warning.
    pub is_fail: bool,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub rating: ContrastRating,
    pub tiers: Vec<TierResult>,
}

impl ContrastReport {
    /// Ratio rounded to 2 decimal places.
    pub fn rounded_ratio(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }

    /// `"4.54:1"`
    pub fn display_ratio(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ratio: f64) -> ContrastReport {
        ContrastReport {
            ratio,
            is_fail: false,
            pass_aa: true,
            pass_aa_large: true,
            pass_aaa: false,
            rating: ContrastRating::Good,
            tiers: Vec::new(),
        }
    }

    #[test]
    fn color_hex_is_lowercase_and_padded() {
        assert_eq!(Color::new(0x2c, 0x3e, 0x50).to_hex(), "#2c3e50");
        assert_eq!(Color::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn from_channels_accepts_8bit_values() {
        assert_eq!(Color::from_channels(0, 128, 255), Ok(Color::new(0, 128, 255)));
    }

    #[test]
    fn from_channels_rejects_out_of_range() {
        assert_eq!(
            Color::from_channels(255, 256, 0),
            Err(ColorError::ChannelOutOfRange {
                channel: "g",
                value: 256
            })
        );
        assert!(matches!(
            Color::from_channels(u32::MAX, 0, 0),
            Err(ColorError::ChannelOutOfRange { channel: "r", .. })
        ));
    }

    #[test]
    fn display_ratio_uses_two_decimals() {
        assert_eq!(report(4.5).display_ratio(), "4.50:1");
        assert_eq!(report(4.54178).display_ratio(), "4.54:1");
    }

    #[test]
    fn rounded_ratio_matches_display() {
        let r = report(10.9837);
        assert!((r.rounded_ratio() - 10.98).abs() < 1e-9);
    }

    #[test]
    fn report_serializes_camel_case() {
        let value = serde_json::to_value(report(5.0)).unwrap();
        assert_eq!(value["isFail"], false);
        assert_eq!(value["passAaLarge"], true);
        assert_eq!(value["rating"], "Good");
    }
}
