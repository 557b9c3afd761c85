use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Card background in the dark theme (`--surface-color`).
pub const DARK_SURFACE: Color = Color::new(0x2c, 0x3e, 0x50);
/// Card background in the light theme.
pub const LIGHT_SURFACE: Color = Color::WHITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads the document's `data-theme` attribute. Anything but `"dark"`,
    /// including an unset attribute, is the light theme.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn surface_color(self) -> Color {
        match self {
            ThemeMode::Light => LIGHT_SURFACE,
            ThemeMode::Dark => DARK_SURFACE,
        }
    }
}

/// The three brand colors the editor checks against white text.
/// Values are raw text as typed, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl BrandPalette {
    /// `(css variable name, value)` in display order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("brand-primary", self.primary.as_str()),
            ("brand-secondary", self.secondary.as_str()),
            ("brand-accent", self.accent.as_str()),
        ]
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self {
            primary: "#148aff".to_string(),
            secondary: "#b6f702".to_string(),
            accent: "#758e2e".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hex::parse_color;

    #[test]
    fn missing_attribute_is_light() {
        assert_eq!(ThemeMode::from_attribute(None), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(Some("")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_attribute(Some("sepia")), ThemeMode::Light);
    }

    #[test]
    fn dark_attribute_is_dark() {
        assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.surface_color().to_hex(), "#2c3e50");
        assert_eq!(ThemeMode::Light.surface_color(), Color::WHITE);
    }

    #[test]
    fn mode_deserializes_lowercase() {
        let mode: ThemeMode = serde_json::from_str(r#""dark""#).unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn default_palette_parses() {
        for (name, value) in BrandPalette::default().entries() {
            assert!(parse_color(value).is_some(), "{name} = {value}");
        }
    }
}
