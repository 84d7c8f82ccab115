//! Color conversion and palette generation.
//!
//! The math (`color`, `ramp`, `monochrome`, `palette`) is pure and never
//! fails. `input` validates user text before it reaches the math, and
//! `session`, `command`, `settings` and `export` serve the front ends.
//!
//! ```
//! use swatch_core::{PaletteType, parse_hex};
//!
//! let base = parse_hex("#6366F1")?;
//! let palette = PaletteType::Tints.generate(base, 5);
//! assert_eq!(palette.hex_strings()[0], "#6366f1");
//! # Ok::<(), swatch_core::SwatchError>(())
//! ```

pub mod color;
pub mod command;
pub mod error;
pub mod export;
pub mod input;
pub mod monochrome;
pub mod palette;
pub mod ramp;
pub mod settings;

mod session;

pub use color::{Hsl, Rgb, contrast_text, hex_to_rgb, hsl_to_rgb, random_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{Result, SwatchError};
pub use input::{MAX_COUNT, MIN_COUNT, clamp_count, parse_hex, sanitize_hex, validated};
pub use palette::{
    Palette, PaletteType, generate_monochromatic_palette, generate_shades, generate_tints,
    generate_tones,
};
pub use session::Session;
pub use settings::{Settings, Theme};
