use crate::types::Color;

/// Channel coefficients for the relative luminance sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl LuminanceWeights {
    /// WCAG 2.x: 0.2126 R + 0.7152 G + 0.0722 B.
    pub const WCAG: Self = Self {
        red: 0.2126,
        green: 0.7152,
        blue: 0.0722,
    };

    /// Blue coefficient 0.0729, as shipped by earlier versions of the theme
    /// editor. Weights sum to 1.0007, so white vs. black lands slightly above 21.
    pub const LEGACY_EDITOR: Self = Self {
        red: 0.2126,
        green: 0.7152,
        blue: 0.0729,
    };
}

impl Default for LuminanceWeights {
    fn default() -> Self {
        Self::WCAG
    }
}

/// Convert sRGB channel (0-255) to linear light value.
/// WCAG 2.x breakpoint: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
pub fn relative_luminance(color: Color) -> f64 {
    relative_luminance_with(color, LuminanceWeights::WCAG)
}

pub fn relative_luminance_with(color: Color, weights: LuminanceWeights) -> f64 {
    weights.red * srgb_to_linear(color.r)
        + weights.green * srgb_to_linear(color.g)
        + weights.blue * srgb_to_linear(color.b)
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2.
/// Argument order does not matter.
pub fn luminance_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two colors, in [1, 21].
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    contrast_ratio_with(a, b, LuminanceWeights::WCAG)
}

pub fn contrast_ratio_with(a: Color, b: Color, weights: LuminanceWeights) -> f64 {
    luminance_ratio(
        relative_luminance_with(a, weights),
        relative_luminance_with(b, weights),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn white_on_white_is_exactly_1() {
        assert_eq!(contrast_ratio(Color::WHITE, Color::WHITE), 1.0);
        assert_eq!(contrast_ratio(hex("#148aff"), hex("#148aff")), 1.0);
    }

    #[test]
    fn luminance_bounds() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 sits below the 0.03928 breakpoint
        let grey = Color::new(10, 10, 10);
        let expected = (10.0 / 255.0) / 12.92;
        assert!((relative_luminance(grey) - expected).abs() < 1e-12);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = contrast_ratio(hex("#767676"), Color::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);
    }

    #[test]
    fn order_independent() {
        let pairs = [
            ("#ff0000", "#ffffff"),
            ("#148aff", "#2c3e50"),
            ("#b6f702", "#000000"),
            ("#758e2e", "#ecf0f1"),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(hex(a), hex(b)), contrast_ratio(hex(b), hex(a)));
        }
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = contrast_ratio(hex("#ff0000"), Color::WHITE);
        assert!((ratio - 3.99).abs() < 0.01);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = contrast_ratio(hex("#1e293b"), Color::WHITE);
        assert!((ratio - 14.62).abs() < 0.05);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76
        let ratio = contrast_ratio(hex("#a1a1aa"), hex("#09090b"));
        assert!((ratio - 7.76).abs() < 0.05);
    }

    #[test]
    fn dark_surface_on_white() {
        let ratio = contrast_ratio(hex("#2c3e50"), Color::WHITE);
        assert!((ratio - 10.98).abs() < 0.05, "got {ratio}");
    }

    #[test]
    fn legacy_weights_shift_blue_heavy_colors() {
        let blue = hex("#0000ff");
        let wcag = contrast_ratio(blue, Color::BLACK);
        let legacy = contrast_ratio_with(blue, Color::BLACK, LuminanceWeights::LEGACY_EDITOR);
        assert!((wcag - 2.444).abs() < 1e-9);
        assert!((legacy - 2.458).abs() < 1e-9);
    }

    #[test]
    fn legacy_weights_exceed_21_for_black_on_white() {
        let ratio = contrast_ratio_with(Color::BLACK, Color::WHITE, LuminanceWeights::LEGACY_EDITOR);
        assert!(ratio > 21.0);
        assert!((ratio - 21.014).abs() < 1e-9);
    }

    #[test]
    fn default_weights_are_wcag() {
        assert_eq!(LuminanceWeights::default(), LuminanceWeights::WCAG);
    }
}
