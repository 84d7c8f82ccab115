//! Error types for the swatch_core library

use thiserror::Error;

/// Result type alias for swatch_core operations
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Errors raised at the boundary of the color math.
///
/// The conversion and generation functions themselves never fail; these
/// come from the validation wrapper and from image export.
#[derive(Error, Debug)]
pub enum SwatchError {
    /// Nothing left after stripping the leading `#`
    #[error("empty color string")]
    Empty,

    /// A hex color must have exactly six digits
    #[error("invalid hex length: expected 6 digits, got {len}")]
    InvalidLength { len: usize },

    /// A character outside `0-9a-fA-F`
    #[error("invalid hex digit {ch:?}")]
    InvalidDigit { ch: char },

    /// Unknown palette type name
    #[error("unknown palette type '{name}' (expected monochromatic, shades, tints or tones)")]
    UnknownPaletteType { name: String },

    /// Unknown theme name
    #[error("unknown theme '{name}' (expected light or dark)")]
    UnknownTheme { name: String },

    /// Export needs at least one swatch to lay out
    #[error("cannot export an empty palette")]
    EmptyPalette,

    /// Encoding or writing the PNG failed
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    /// The bundled label font could not be parsed
    #[error("font load failed: {0}")]
    Font(&'static str),
}

impl SwatchError {
    /// True for errors caused by user-supplied text, which a front end
    /// should report and let the user retry.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SwatchError::Empty
                | SwatchError::InvalidLength { .. }
                | SwatchError::InvalidDigit { .. }
                | SwatchError::UnknownPaletteType { .. }
                | SwatchError::UnknownTheme { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(SwatchError::Empty.is_input_error());
        assert!(SwatchError::InvalidLength { len: 3 }.is_input_error());
        assert!(SwatchError::InvalidDigit { ch: 'g' }.is_input_error());
        assert!(!SwatchError::EmptyPalette.is_input_error());
        assert!(!SwatchError::Font("bad table").is_input_error());
    }

    #[test]
    fn messages_name_the_problem() {
        let e = SwatchError::InvalidLength { len: 4 };
        assert_eq!(e.to_string(), "invalid hex length: expected 6 digits, got 4");

        let e = SwatchError::InvalidDigit { ch: 'z' };
        assert_eq!(e.to_string(), "invalid hex digit 'z'");
    }
}
