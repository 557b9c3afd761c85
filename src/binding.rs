//! Node entry points for the editor UI.
//!
//! Mirrors of the core types as `#[napi(object)]` (NAPI objects carry no
//! `u8`/enum fields, so channels widen to `u32` and the rating is a string).

use napi::{Error, Result, Status};
use napi_derive::napi;

use crate::config::{default_thresholds as wcag_thresholds, ThresholdTable};
use crate::engine::ColorCheck;
use crate::theme::ThemeMode;
use crate::types::{Color, ContrastReport, ThresholdLevel, TierResult};

#[napi(object)]
#[derive(Debug, Clone)]
pub struct RgbColor {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ThresholdTier {
    pub level: String,
    pub normal_text: f64,
    pub large_text: f64,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct TierOutcome {
    pub level: String,
    pub pass_normal: bool,
    pub pass_large: bool,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastSummary {
    pub ratio: f64,
    /// e.g. "4.54:1"
    pub display_ratio: String,
    pub is_fail: bool,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    /// "Excellent" | "Good" | "Poor" | "Fail"
    pub rating: String,
    pub tiers: Vec<TierOutcome>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct NamedColor {
    pub name: String,
    pub value: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorCheckResult {
    pub name: String,
    pub context: String,
    /// Normalized `#rrggbb`; absent when the input was not a color.
    pub hex: Option<String>,
    pub show_warning: bool,
    pub report: Option<ContrastSummary>,
}

impl From<Color> for RgbColor {
    fn from(color: Color) -> Self {
        Self {
            r: color.r as u32,
            g: color.g as u32,
            b: color.b as u32,
        }
    }
}

impl TryFrom<RgbColor> for Color {
    type Error = Error;

    fn try_from(value: RgbColor) -> Result<Self> {
        Color::from_channels(value.r, value.g, value.b)
            .map_err(|err| Error::new(Status::InvalidArg, err.to_string()))
    }
}

impl From<ThresholdTier> for ThresholdLevel {
    fn from(tier: ThresholdTier) -> Self {
        ThresholdLevel::new(tier.level, tier.normal_text, tier.large_text)
    }
}

impl From<&ThresholdLevel> for ThresholdTier {
    fn from(tier: &ThresholdLevel) -> Self {
        Self {
            level: tier.level.clone(),
            normal_text: tier.normal_text,
            large_text: tier.large_text,
        }
    }
}

impl From<TierResult> for TierOutcome {
    fn from(tier: TierResult) -> Self {
        Self {
            level: tier.level,
            pass_normal: tier.pass_normal,
            pass_large: tier.pass_large,
        }
    }
}

impl From<ContrastReport> for ContrastSummary {
    fn from(report: ContrastReport) -> Self {
        Self {
            display_ratio: report.display_ratio(),
            ratio: report.ratio,
            is_fail: report.is_fail,
            pass_aa: report.pass_aa,
            pass_aa_large: report.pass_aa_large,
            pass_aaa: report.pass_aaa,
            rating: report.rating.as_str().to_string(),
            tiers: report.tiers.into_iter().map(TierOutcome::from).collect(),
        }
    }
}

impl From<ColorCheck> for ColorCheckResult {
    fn from(check: ColorCheck) -> Self {
        Self {
            show_warning: check.shows_warning(),
            name: check.name,
            context: check.context.to_string(),
            hex: check.color.map(|c| c.to_hex()),
            report: check.report.map(ContrastSummary::from),
        }
    }
}

fn to_table(tiers: Option<Vec<ThresholdTier>>) -> Result<ThresholdTable> {
    let levels: Option<Vec<ThresholdLevel>> = tiers.map(|tiers| tiers.into_iter().map(ThresholdLevel::from).collect());
    ThresholdTable::from_optional_levels(levels).map_err(|err| Error::from_reason(err.to_string()))
}

#[napi]
pub fn health_check() -> String {
    "theme-contrast ok".to_string()
}

/// `null` for anything that is not `#rgb` / `#rrggbb`.
#[napi]
pub fn parse_color(text: String) -> Option<RgbColor> {
    crate::math::hex::parse_color(&text).map(RgbColor::from)
}

#[napi]
pub fn evaluate_contrast(
    a: RgbColor,
    b: RgbColor,
    thresholds: Option<Vec<ThresholdTier>>,
) -> Result<ContrastSummary> {
    let table = to_table(thresholds)?;
    let report = crate::math::checker::evaluate_contrast(
        Color::try_from(a)?,
        Color::try_from(b)?,
        table.levels(),
    );
    Ok(report.into())
}

#[napi]
pub fn check_brand_colors(
    colors: Vec<NamedColor>,
    thresholds: Option<Vec<ThresholdTier>>,
) -> Result<Vec<ColorCheckResult>> {
    let table = to_table(thresholds)?;
    let pairs: Vec<(&str, &str)> = colors
        .iter()
        .map(|c| (c.name.as_str(), c.value.as_str()))
        .collect();
    Ok(crate::engine::check_brand_colors(&pairs, table.levels())
        .into_iter()
        .map(ColorCheckResult::from)
        .collect())
}

/// `theme` is the document's `data-theme` attribute.
#[napi]
pub fn check_outline_contrast(
    primary: String,
    theme: Option<String>,
    thresholds: Option<Vec<ThresholdTier>>,
) -> Result<ColorCheckResult> {
    let table = to_table(thresholds)?;
    let mode = ThemeMode::from_attribute(theme.as_deref());
    Ok(crate::engine::check_outline_contrast(&primary, mode, table.levels()).into())
}

#[napi]
pub fn default_thresholds() -> Vec<ThresholdTier> {
    wcag_thresholds().iter().map(ThresholdTier::from).collect()
}

/// Parse the editor's `accessibilityContrast` JSON (`"4.5:1"` ratios).
#[napi]
pub fn load_thresholds(json: String) -> Result<Vec<ThresholdTier>> {
    let table = ThresholdTable::from_json(&json).map_err(|err| Error::from_reason(err.to_string()))?;
    Ok(table.levels().iter().map(ThresholdTier::from).collect())
}
