//! Validation at the boundary between front ends and the color math.
//!
//! The conversion functions trust their inputs. Anything typed by a user
//! goes through here first.

use crate::color::Rgb;
use crate::palette::{Palette, PaletteType};
use crate::{Result, SwatchError};

/// Smallest palette the front ends offer.
pub const MIN_COUNT: usize = 3;
/// Largest palette the front ends offer.
pub const MAX_COUNT: usize = 50;

/// Strict `#RRGGBB` parser (the `#` is optional, case is ignored).
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.is_empty() {
        return Err(SwatchError::Empty);
    }
    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(SwatchError::InvalidDigit { ch });
    }
    if digits.len() != 6 {
        return Err(SwatchError::InvalidLength { len: digits.len() });
    }

    let packed = u32::from_str_radix(digits, 16).map_err(|_| SwatchError::InvalidLength {
        len: digits.len(),
    })?;
    Ok(Rgb::from_packed(packed))
}

/// Keep only hex digits, at most six of them, behind a `#`.
///
/// The result is not guaranteed to be a full color: `"12 zz"` becomes
/// `"#12"`, which [`parse_hex`] still rejects.
pub fn sanitize_hex(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .collect();
    format!("#{digits}")
}

pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Parse, clamp and generate in one step.
pub fn validated(palette_type: PaletteType, base: &str, count: usize) -> Result<Palette> {
    let base = parse_hex(base)?;
    Ok(palette_type.generate(base, clamp_count(count)))
}
