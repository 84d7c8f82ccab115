use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SwatchError;
use crate::color::{Rgb, hex_to_rgb, rgb_to_hex};
use crate::{monochrome, ramp};

/// Which generation strategy produced a palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Monochromatic,
    Shades,
    Tints,
    Tones,
}

impl PaletteType {
    pub const ALL: [PaletteType; 4] = [
        PaletteType::Monochromatic,
        PaletteType::Shades,
        PaletteType::Tints,
        PaletteType::Tones,
    ];

    /// Lowercase key used in settings files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Shades => "shades",
            PaletteType::Tints => "tints",
            PaletteType::Tones => "tones",
        }
    }

    /// Title-case name for headings.
    pub fn label(self) -> &'static str {
        match self {
            PaletteType::Monochromatic => "Monochromatic",
            PaletteType::Shades => "Shades",
            PaletteType::Tints => "Tints",
            PaletteType::Tones => "Tones",
        }
    }

    pub fn colors(self, base: Rgb, count: usize) -> Vec<Rgb> {
        match self {
            PaletteType::Monochromatic => monochrome::monochromatic(base, count),
            PaletteType::Shades => ramp::shades(base, count),
            PaletteType::Tints => ramp::tints(base, count),
            PaletteType::Tones => ramp::tones(base, count),
        }
    }

    pub fn generate(self, base: Rgb, count: usize) -> Palette {
        Palette {
            palette_type: self,
            base,
            colors: self.colors(base, count),
        }
    }

    /// Position of the unmodified base color in a palette of `count`.
    pub fn base_position(self, count: usize) -> usize {
        match self {
            PaletteType::Monochromatic => monochrome::base_index(count),
            _ => 0,
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PaletteType {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let low = s.trim().to_lowercase();
        PaletteType::ALL
            .into_iter()
            .find(|t| t.key() == low || (low.len() >= 3 && t.key().starts_with(&low)))
            .ok_or_else(|| SwatchError::UnknownPaletteType {
                name: s.to_string(),
            })
    }
}

/// An ordered run of colors derived from one base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    palette_type: PaletteType,
    base: Rgb,
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn palette_type(&self) -> PaletteType {
        self.palette_type
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn base_position(&self) -> usize {
        self.palette_type.base_position(self.colors.len())
    }

    /// Canonical lowercase `#rrggbb` strings.
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().copied().map(rgb_to_hex).collect()
    }

    /// Uppercase `#RRGGBB` strings, as printed under each swatch.
    pub fn labels(&self) -> Vec<String> {
        self.colors.iter().map(Rgb::to_string).collect()
    }

    /// Heading such as "Tints Palette".
    pub fn title(&self) -> String {
        format!("{} Palette", self.palette_type.label())
    }
}

// String-level entry points. The base string is echoed back verbatim at its
// position; every derived color is canonical lowercase.

fn generate_hex(palette_type: PaletteType, base: &str, count: usize) -> Vec<String> {
    let colors = palette_type.colors(hex_to_rgb(base), count);
    let at = palette_type.base_position(colors.len());
    colors
        .into_iter()
        .enumerate()
        .map(|(i, c)| if i == at { base.to_string() } else { rgb_to_hex(c) })
        .collect()
}

pub fn generate_shades(base: &str, count: usize) -> Vec<String> {
    generate_hex(PaletteType::Shades, base, count)
}

pub fn generate_tints(base: &str, count: usize) -> Vec<String> {
    generate_hex(PaletteType::Tints, base, count)
}

pub fn generate_tones(base: &str, count: usize) -> Vec<String> {
    generate_hex(PaletteType::Tones, base, count)
}

pub fn generate_monochromatic_palette(base: &str, count: usize) -> Vec<String> {
    generate_hex(PaletteType::Monochromatic, base, count)
}
