use rayon::prelude::*;
use serde::Serialize;

use crate::math::checker::evaluate_contrast;
use crate::math::hex::parse_color;
use crate::theme::{BrandPalette, ThemeMode};
use crate::types::{Color, ContrastReport, ThresholdLevel};

pub const WHITE_TEXT_CONTEXT: &str = "vs. White Text";
pub const OUTLINE_CONTEXT: &str = "Outline on Card";
pub const OUTLINE_CHECK: &str = "outline";

/// One warning slot in the editor: a named color checked in some context.
///
/// `report` is `None` when the input text was not a valid color; the UI
/// clears the slot instead of showing an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCheck {
    pub name: String,
    pub context: &'static str,
    pub color: Option<Color>,
    pub report: Option<ContrastReport>,
}

impl ColorCheck {
    fn evaluate(
        name: &str,
        context: &'static str,
        text: &str,
        against: Color,
        thresholds: &[ThresholdLevel],
    ) -> Self {
        let color = parse_color(text);
        ColorCheck {
            name: name.to_string(),
            context,
            color,
            report: color.map(|c| evaluate_contrast(c, against, thresholds)),
        }
    }

    /// Whether the warning should be visible.
    pub fn shows_warning(&self) -> bool {
        self.report.as_ref().map_or(false, |r| r.is_fail)
    }
}

/// Check each `(name, color text)` against white text.
///
/// Entries are evaluated on the rayon pool; every entry is independent, so
/// there is no shared state. Output order matches input order.
pub fn check_brand_colors(colors: &[(&str, &str)], thresholds: &[ThresholdLevel]) -> Vec<ColorCheck> {
    colors
        .par_iter()
        .map(|(name, text)| {
            ColorCheck::evaluate(name, WHITE_TEXT_CONTEXT, text, Color::WHITE, thresholds)
        })
        .collect()
}

pub fn check_palette(palette: &BrandPalette, thresholds: &[ThresholdLevel]) -> Vec<ColorCheck> {
    check_brand_colors(&palette.entries(), thresholds)
}

/// The outline button draws the primary color on a card, so it is checked
/// against the card surface of the active theme.
pub fn check_outline_contrast(
    primary: &str,
    mode: ThemeMode,
    thresholds: &[ThresholdLevel],
) -> ColorCheck {
    ColorCheck::evaluate(
        OUTLINE_CHECK,
        OUTLINE_CONTEXT,
        primary,
        mode.surface_color(),
        thresholds,
    )
}
