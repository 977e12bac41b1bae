// Colors, two-color schemes and the brightness -> color mapping.
// Visual: decides which tint every halftone dot gets.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color (no alpha).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits in any case).
    pub fn parse(s: &str) -> Result<Self, Error> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColorFormat(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Pack as 0x00RRGGBB, the layout minifb wants.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub fn from_u32(px: u32) -> Self {
        Self::new(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Blend from `a` to `b`; `factor` 0 gives `a`, 1 gives `b`.
/// Each channel is `round(a + factor * (b - a))`, clamped to 0..=255.
pub fn interpolate(a: Color, b: Color, factor: f64) -> Color {
    let mix = |ca: u8, cb: u8| {
        let v = ca as f64 + factor * (cb as f64 - ca as f64);
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Start color for dark pixels, end color for bright ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub start: Color,
    pub end: Color,
}

impl ColorScheme {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color for a brightness fraction in [0, 1].
    #[inline]
    pub fn at(&self, fraction: f64) -> Color {
        interpolate(self.start, self.end, fraction)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(Color::BLACK, Color::WHITE)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::new(12, 200, 99);
    const B: Color = Color::new(250, 3, 180);

    #[test]
    fn same_endpoints_give_that_color() {
        for f in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_eq!(interpolate(A, A, f), A);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(interpolate(A, B, 0.0), A);
        assert_eq!(interpolate(A, B, 1.0), B);
    }

    #[test]
    fn midpoint_of_black_and_white_rounds_up() {
        assert_eq!(interpolate(Color::BLACK, Color::WHITE, 0.5), Color::new(0x80, 0x80, 0x80));
    }

    #[test]
    fn channels_follow_the_rounding_rule() {
        // r: 12 + 0.3*238 = 83.4, g: 200 - 0.3*197 = 140.9, b: 99 + 0.3*81 = 123.3
        assert_eq!(interpolate(A, B, 0.3), Color::new(83, 141, 123));
    }

    #[test]
    fn out_of_range_factor_is_clamped() {
        assert_eq!(interpolate(Color::BLACK, Color::WHITE, 1.5), Color::WHITE);
        assert_eq!(interpolate(Color::BLACK, Color::WHITE, -0.5), Color::BLACK);
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::parse("#ff8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!("00FFaa".parse::<Color>().unwrap(), Color::new(0, 255, 170));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#fff", "#12345g", "#1234567", "red", "#-12345"] {
            match Color::parse(bad) {
                Err(Error::InvalidColorFormat(s)) => assert_eq!(s, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn display_and_packing() {
        let c = Color::new(0x12, 0xAB, 0x0F);
        assert_eq!(c.to_string(), "#12AB0F");
        assert_eq!(c.to_u32(), 0x0012_AB0F);
        assert_eq!(Color::from_u32(0x0012_AB0F), c);
    }

    #[test]
    fn default_scheme_is_black_to_white() {
        let s = ColorScheme::default();
        assert_eq!(s.at(0.0), Color::BLACK);
        assert_eq!(s.at(1.0), Color::WHITE);
    }
}
