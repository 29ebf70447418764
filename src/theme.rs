//! Colour themes for the printed price list
//!
//! Themes have nothing to do with pagination. A theme is a primary and a
//! secondary colour, each with a lighter and darker shade, picked either from
//! the named presets or derived from any `#rrggbb` colour.

use std::fmt;
use crate::error::{Error, Result};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Move each channel 30% of the way towards white
    pub fn lighten(self) -> Self {
        let up = |c: u8| (c as f64 + (255.0 - c as f64) * 0.3).floor().min(255.0) as u8;
        Rgb(up(self.0), up(self.1), up(self.2))
    }

    /// Scale each channel to 70%
    pub fn darken(self) -> Self {
        let down = |c: u8| (c as f64 * 0.7).floor() as u8;
        Rgb(down(self.0), down(self.1), down(self.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A colour with its light and dark variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shades {
    pub main: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
}

/// Derive light and dark shades from a base colour
///
/// ```
/// use price_list::theme::{derive_shades, Rgb};
///
/// let shades = derive_shades(Rgb(100, 200, 0));
/// assert_eq!(shades.light, Rgb(146, 216, 76));
/// assert_eq!(shades.dark, Rgb(70, 140, 0));
/// ```
pub fn derive_shades(base: Rgb) -> Shades {
    Shades {
        main: base,
        light: base.lighten(),
        dark: base.darken(),
    }
}

/// Hand-picked preset colours, in the order they are offered
const PRESETS: &[(&str, &str, &str, &str)] = &[
    ("orange", "#ff6b35", "#ff8c42", "#e55a2b"),
    ("blue", "#2196f3", "#64b5f6", "#1976d2"),
    ("green", "#4caf50", "#81c784", "#388e3c"),
    ("purple", "#9c27b0", "#ba68c8", "#7b1fa2"),
    ("red", "#f44336", "#ef5350", "#d32f2f"),
    ("teal", "#009688", "#4db6ac", "#00796b"),
    ("indigo", "#3f51b5", "#7986cb", "#303f9f"),
    ("black", "#424242", "#757575", "#212121"),
    ("gray", "#6c757d", "#adb5bd", "#495057"),
    ("navy", "#1b365d", "#2e5984", "#0d1b2a"),
];

/// Names of the preset colours
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, ..)| *name)
}

/// Look up a preset by name (case-insensitive)
pub fn preset(name: &str) -> Option<Shades> {
    let (_, main, light, dark) = PRESETS
        .iter()
        .find(|(preset, ..)| preset.eq_ignore_ascii_case(name.trim()))?;

    Some(Shades {
        main: Rgb::from_hex(main).ok()?,
        light: Rgb::from_hex(light).ok()?,
        dark: Rgb::from_hex(dark).ok()?,
    })
}

/// Resolve a colour setting: a preset name, or `#rrggbb` for custom shades
pub fn resolve_shades(value: &str) -> Result<Shades> {
    if value.trim().starts_with('#') {
        return Rgb::from_hex(value).map(derive_shades);
    }
    preset(value).ok_or_else(|| Error::UnknownTheme(value.to_string()))
}

/// Primary and secondary colours of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Shades,
    pub secondary: Shades,
}

impl Theme {
    pub fn resolve(primary: &str, secondary: &str) -> Result<Self> {
        Ok(Self {
            primary: resolve_shades(primary)?,
            secondary: resolve_shades(secondary)?,
        })
    }

    /// CSS custom properties for a `:root` rule
    pub fn css_variables(&self) -> String {
        format!(
            "--primary-color: {}; --primary-light: {}; --primary-dark: {}; \
             --secondary-color: {}; --secondary-light: {}; --secondary-dark: {};",
            self.primary.main,
            self.primary.light,
            self.primary.dark,
            self.secondary.main,
            self.secondary.light,
            self.secondary.dark,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::from_hex("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::from_hex("2196F3").unwrap(), Rgb(33, 150, 243));
        assert_eq!(Rgb(255, 107, 53).to_string(), "#ff6b35");
    }

    #[test]
    fn test_parse_hex_invalid() {
        for bad in ["", "#fff", "#ff6b3", "#ff6b355", "#gg0000", "orange"] {
            assert!(matches!(Rgb::from_hex(bad), Err(Error::InvalidColor(_))), "accepted {}", bad);
        }
    }

    #[test]
    fn test_derive_shades_extremes() {
        let white = derive_shades(Rgb(255, 255, 255));
        assert_eq!(white.light, Rgb(255, 255, 255));
        assert_eq!(white.dark, Rgb(178, 178, 178));

        let black = derive_shades(Rgb(0, 0, 0));
        assert_eq!(black.light, Rgb(76, 76, 76));
        assert_eq!(black.dark, Rgb(0, 0, 0));
    }

    #[test]
    fn test_presets() {
        assert_eq!(preset_names().count(), 10);
        let orange = preset("Orange").unwrap();
        assert_eq!(orange.main, Rgb(0xff, 0x6b, 0x35));
        assert_eq!(orange.dark.to_string(), "#e55a2b");
        assert!(preset("magenta").is_none());
        for name in preset_names() {
            assert!(preset(name).is_some(), "preset {} does not parse", name);
        }
    }

    #[test]
    fn test_resolve_shades() {
        assert_eq!(resolve_shades("blue").unwrap(), preset("blue").unwrap());
        assert_eq!(resolve_shades("#000000").unwrap(), derive_shades(Rgb(0, 0, 0)));
        assert!(matches!(resolve_shades("magenta"), Err(Error::UnknownTheme(_))));
        assert!(matches!(resolve_shades("#zzzzzz"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_css_variables() {
        let theme = Theme::resolve("orange", "blue").unwrap();
        let css = theme.css_variables();
        assert!(css.contains("--primary-color: #ff6b35;"));
        assert!(css.contains("--secondary-dark: #1976d2;"));
    }
}
