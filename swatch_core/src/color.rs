//! Hex / RGB / HSL conversions.
//!
//! Everything in here is a closed-form computation: no validation, no
//! errors, no logging. Strict parsing lives in [`crate::input`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SwatchError;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue, saturation and lightness, each in [0, 1]. Hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unbounded channel values on the 0..=255 scale.
    ///
    /// Each channel is rounded to the nearest integer and clamped before it
    /// is stored, so out-of-range math can never corrupt a packed hex value.
    /// NaN maps to 0.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Unpack the low 24 bits of `packed` as `0xRRGGBB`.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

/// Uppercase `#RRGGBB`, the form shown on swatch labels.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.packed())
    }
}

impl FromStr for Rgb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::input::parse_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

fn to_channel(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    v.round().clamp(0.0, 255.0) as u8
}

/// Decode `#RRGGBB` (the `#` is optional) without validating it.
///
/// Digits are read up to the first non-hex character; anything missing
/// reads as zero bits and surplus digits push the leading ones out of range.
/// Use [`crate::input::parse_hex`] when the input is untrusted.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let packed = digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_shl(4) | d);
    Rgb::from_packed(packed)
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:06x}", rgb.packed())
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sector / 6.0, s, l)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::from_channels(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_channels(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Weighted brightness on the 0..=255 scale.
pub fn brightness(rgb: Rgb) -> f64 {
    (rgb.r as f64 * 299.0 + rgb.g as f64 * 587.0 + rgb.b as f64 * 114.0) / 1000.0
}

/// Text color for a label drawn on top of `background`.
pub fn contrast_text(background: Rgb) -> Rgb {
    if brightness(background) > 128.0 {
        BLACK
    } else {
        WHITE
    }
}

pub fn random_rgb<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::from_packed(rng.random_range(0..0xFF_FFFF))
}
