//! Hex and HSL color primitives.
//!
//! [`Color`] is an opaque sRGB value parsed from a hex string. Everything the
//! engine hands back to callers is a hex string, so the free functions here
//! (`hex_to_hsl`, `hsl_to_hex`, `lighten`, `darken`) work on strings and
//! recover from malformed input by substituting [`FALLBACK_COLOR`].
//!
//! Hex output is always uppercase `#RRGGBB`. Input is case-insensitive and
//! accepts `#RGB`, `#RRGGBB`, with or without the leading `#`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::{ColorError, Result};

/// Hex string substituted for any malformed color input (teal).
pub const FALLBACK_COLOR: &str = "#14B8A6";

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue/saturation/lightness triple.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
/// Values are kept unrounded so hex -> HSL -> hex is lossless.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Integer-rounded copy for display.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            h: self.h.round().rem_euclid(360.0),
            s: self.s.round(),
            l: self.l.round(),
        }
    }
}

impl Color {
    /// The fallback color as a value.
    pub const FALLBACK: Color = Color {
        r: 0x14,
        g: 0xB8,
        b: 0xA6,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strictly parse a hex color string.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(input));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::invalid_hex(input));

        match body.len() {
            3 => {
                // #RGB expands each nibble: 0xA -> 0xAA
                let expand = |i: usize| channel(&body[i..i + 1]).map(|n| n * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&body[0..2])?,
                channel(&body[2..4])?,
                channel(&body[4..6])?,
            )),
            len => Err(ColorError::invalid_length(input, len)),
        }
    }

    /// Parse a hex color, substituting [`Color::FALLBACK`] on failure.
    pub fn parse_or_fallback(input: &str) -> Self {
        match Self::parse(input) {
            Ok(color) => color,
            Err(error) => {
                warn!(%error, fallback = FALLBACK_COLOR, "malformed color, using fallback");
                Self::FALLBACK
            }
        }
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let c_max = r.max(g).max(b);
        let c_min = r.min(g).min(b);
        let delta = c_max - c_min;

        let h = if delta == 0.0 {
            0.0
        } else if c_max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if c_max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let l = (c_max + c_min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl::new(h.rem_euclid(360.0), s * 100.0, l * 100.0)
    }

    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = if hsl.h.is_finite() {
            hsl.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = clamp_percent(hsl.s) / 100.0;
        let l = clamp_percent(hsl.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Convert a hex string to HSL. Malformed input converts the fallback color.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    Color::parse_or_fallback(hex).to_hsl()
}

/// Convert HSL to an uppercase hex string. Out-of-range components are clamped.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Color::from_hsl(hsl).to_hex()
}

/// Raise HSL lightness by `fraction * 100` points, clamped to 100.
///
/// `fraction` is clamped to `[0, 1]`. A zero fraction returns `hex` unchanged.
pub fn lighten(hex: &str, fraction: f64) -> String {
    shift_lightness(hex, clamp_fraction(fraction) * 100.0)
}

/// Lower HSL lightness by `fraction * 100` points, clamped to 0.
///
/// `fraction` is clamped to `[0, 1]`. A zero fraction returns `hex` unchanged.
pub fn darken(hex: &str, fraction: f64) -> String {
    shift_lightness(hex, -clamp_fraction(fraction) * 100.0)
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

fn shift_lightness(hex: &str, points: f64) -> String {
    let color = match Color::parse(hex) {
        Ok(_) if points == 0.0 => return hex.to_string(),
        Ok(color) => color,
        Err(_) => Color::parse_or_fallback(hex),
    };
    if points == 0.0 {
        return color.to_hex();
    }

    let mut hsl = color.to_hsl();
    hsl.l = (hsl.l + points).clamp(0.0, 100.0);
    hsl_to_hex(hsl)
}
