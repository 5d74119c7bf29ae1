//! Palette colors
//!
//! Hex strings are parsed leniently: every non-hex character is stripped,
//! then the remaining digits are read either as `rrggbb` or as shorthand
//! `rgb` (each digit doubled). Entries are converted once per burst.

use std::str::FromStr;

use crate::error::ColorError;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color such as `#26ccff`, `0fa` or `rgb: 0E56FA`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex)
    }

    /// Attach an opacity, clamped to [0, 1]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// A fill color with opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// CSS `rgba()` string as accepted by a 2D canvas fill style
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Convert a hex color string to RGB.
///
/// Fewer than six surviving digits is treated as shorthand: the first three
/// digits are each doubled (`"0fa"` reads as `"00ffaa"`). Extra digits past
/// the sixth (or the third, for shorthand) are ignored.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match digits.len() {
        0 => Err(ColorError::Empty(hex.to_string())),
        1 | 2 => Err(ColorError::TooShort(hex.to_string())),
        3..=5 => Ok(Rgb::new(
            digits[0] * 0x11,
            digits[1] * 0x11,
            digits[2] * 0x11,
        )),
        _ => Ok(Rgb::new(
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        )),
    }
}

/// Convert a whole palette, reporting the first bad entry
pub fn colors_to_rgb<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Rgb>, (usize, ColorError)> {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| hex_to_rgb(c.as_ref()).map_err(|e| (i, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_hex() {
        assert_eq!(hex_to_rgb("#26ccff").unwrap(), Rgb::new(0x26, 0xcc, 0xff));
        assert_eq!(hex_to_rgb("#0E56FA").unwrap(), Rgb::new(14, 86, 250));
    }

    #[test]
    fn test_parse_entry_points_agree() {
        let parsed: Rgb = "#17cafa".parse().unwrap();
        assert_eq!(parsed, Rgb::from_hex("17CAFA").unwrap());
        assert!(matches!("#1".parse::<Rgb>(), Err(ColorError::TooShort(_))));
    }

    #[test]
    fn test_shorthand_doubles_each_digit() {
        assert_eq!(hex_to_rgb("0fa").unwrap(), hex_to_rgb("00ffaa").unwrap());
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_non_hex_characters_are_stripped() {
        assert_eq!(
            hex_to_rgb("(17-CA-FA)").unwrap(),
            Rgb::new(0x17, 0xca, 0xfa)
        );
    }

    #[test]
    fn test_extra_digits_ignored() {
        // Trailing alpha pair is dropped
        assert_eq!(hex_to_rgb("#11223344").unwrap(), Rgb::new(0x11, 0x22, 0x33));
        // Four or five digits still read as shorthand
        assert_eq!(hex_to_rgb("abcd").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_too_few_digits_rejected() {
        assert!(matches!(hex_to_rgb(""), Err(ColorError::Empty(_))));
        assert!(matches!(hex_to_rgb("#zz"), Err(ColorError::Empty(_))));
        assert!(matches!(hex_to_rgb("#1f"), Err(ColorError::TooShort(_))));
    }

    #[test]
    fn test_palette_reports_index() {
        let err = colors_to_rgb(&["#fff", "nope", "#000"]).unwrap_err();
        assert_eq!(err.0, 1);
    }

    #[test]
    fn test_css_output() {
        let css = Rgb::new(1, 2, 3).with_alpha(0.5).to_css();
        assert_eq!(css, "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(Rgb::default().with_alpha(1.5).alpha, 1.0);
        assert_eq!(Rgb::default().with_alpha(-0.1).alpha, 0.0);
    }

    proptest! {
        #[test]
        fn prop_shorthand_matches_doubled(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
            let short = format!("#{:x}{:x}{:x}", r, g, b);
            let long = format!("#{:x}{:x}{:x}{:x}{:x}{:x}", r, r, g, g, b, b);
            prop_assert_eq!(hex_to_rgb(&short).unwrap(), hex_to_rgb(&long).unwrap());
        }

        #[test]
        fn prop_six_digit_hex_reads_back(r: u8, g: u8, b: u8) {
            let hex = format!("#{:02X}{:02x}{:02X}", r, g, b);
            prop_assert_eq!(hex_to_rgb(&hex).unwrap(), Rgb::new(r, g, b));
        }
    }
}
