use std::str::FromStr;

use crate::error::{ColorError, ColorResult};
use crate::types::Color;

/// Parse a `#rgb` or `#rrggbb` string (leading `#` optional).
///
/// Returns `None` on anything else. While a user is typing in the hex field
/// partial values are expected, so a rejection is only traced.
pub fn parse_color(text: &str) -> Option<Color> {
    match Color::from_hex(text) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::trace!(%err, "skipping contrast check");
            None
        }
    }
}

impl Color {
    /// Strict hex parsing: exactly 3 or 6 hex digits after an optional `#`.
    /// Shorthand digits are duplicated (`f` -> `0xff`).
    pub fn from_hex(text: &str) -> ColorResult<Self> {
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColorError::InvalidColorFormat {
            input: text.to_string(),
        };

        // from_str_radix alone would accept a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => Ok(Color::new(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}
