//! Accessibility contrast engine for the theme editor: hex parsing, WCAG
//! relative luminance and contrast ratio, and the pass/fail classification
//! behind the live contrast warnings.

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod theme;
pub mod types;

#[cfg(feature = "node")]
mod binding;

pub use config::{default_thresholds, ThresholdTable};
pub use engine::{check_brand_colors, check_outline_contrast, check_palette, ColorCheck};
pub use error::{ColorError, ConfigError};
pub use math::checker::{evaluate_contrast, evaluate_contrast_with};
pub use math::hex::parse_color;
pub use math::wcag::LuminanceWeights;
pub use theme::{BrandPalette, ThemeMode};
pub use types::{Color, ContrastRating, ContrastReport, ThresholdLevel, TierResult};
