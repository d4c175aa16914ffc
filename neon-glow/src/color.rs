//! Hex color parsing.

use crate::error::{NeonError, NeonResult};
use neon_canvas::CanvasColor;
use std::fmt;
use std::str::FromStr;

/// An RGB color with channels normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    /// Build a color from 8-bit channels.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }
}

/// Parse a color written as six hexadecimal digits, e.g. `ec0e77` or `FFFFFF`.
///
/// Each two-digit group is one channel, divided by 255. Anything else
/// (wrong length, a `#` prefix, non-hex characters) is rejected as a whole.
pub fn parse_color(hex: &str) -> NeonResult<Rgb> {
    let invalid = || NeonError::InvalidColor(hex.to_string());

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::from_bytes(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Rgb {
    type Err = NeonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }
}

impl From<Rgb> for CanvasColor {
    fn from(rgb: Rgb) -> Self {
        CanvasColor::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("000000", [0, 0, 0])]
    #[case("FFFFFF", [255, 255, 255])]
    #[case("ec0e77", [0xec, 0x0e, 0x77])]
    #[case("ff31f4", [0xff, 0x31, 0xf4])]
    #[case("FfD796", [0xff, 0xd7, 0x96])]
    fn test_parse_valid(#[case] hex: &str, #[case] bytes: [u8; 3]) {
        let rgb = parse_color(hex).unwrap();
        assert_eq!(rgb.red, bytes[0] as f32 / 255.0);
        assert_eq!(rgb.green, bytes[1] as f32 / 255.0);
        assert_eq!(rgb.blue, bytes[2] as f32 / 255.0);
        for channel in [rgb.red, rgb.green, rgb.blue] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[rstest]
    #[case("")]
    #[case("fff")]
    #[case("fffffff")]
    #[case("ZZZZZZ")]
    #[case("#fffff")]
    #[case("#ffffff")]
    #[case("12 456")]
    #[case("+1+2+3")]
    #[case("ééé")]
    fn test_parse_invalid(#[case] hex: &str) {
        match parse_color(hex) {
            Err(NeonError::InvalidColor(input)) => assert_eq!(input, hex),
            other => panic!("expected invalid color error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_input() {
        let err = parse_color("ZZZZZZ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid color format: ZZZZZZ");
    }

    #[test]
    fn test_display_roundtrip() {
        let rgb: Rgb = "ec0e77".parse().unwrap();
        assert_eq!(rgb.to_string(), "ec0e77");
    }

    #[test]
    fn test_into_canvas_color_is_opaque() {
        let color: CanvasColor = parse_color("ff0000").unwrap().into();
        assert_eq!(color, CanvasColor::rgb(1.0, 0.0, 0.0));
        assert_eq!(color.a, 1.0);
    }
}
