//! Swatch grid export.
//!
//! Lays a palette out in rows of at most ten swatches and paints it into a
//! PNG, with the palette title above the grid and each swatch's hex code
//! under it. The theme picks the background and the text color.

use fontdue::{Font, FontSettings};
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use std::path::Path;

use crate::color::{Rgb, hex_to_rgb};
use crate::palette::{Palette, PaletteType};
use crate::settings::Theme;
use crate::{Result, SwatchError};

pub const SWATCH_WIDTH: u32 = 100;
pub const SWATCH_HEIGHT: u32 = 150;
pub const PADDING: u32 = 20;
/// Room reserved for the title above the grid and the label under each swatch.
pub const LABEL_HEIGHT: u32 = 40;
pub const MAX_COLUMNS: u32 = 10;

const LIGHT_BACKGROUND: &str = "#F9FAFB";
const DARK_BACKGROUND: &str = "#111827";

const TITLE_PX: f32 = 16.0;
const LABEL_PX: f32 = 12.0;
/// Baseline offset of the title below the top padding, and of a label below
/// its swatch.
const TEXT_BASELINE: u32 = 16;

/// Pixel geometry of an exported grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
}

impl GridLayout {
    pub fn for_len(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SwatchError::EmptyPalette);
        }
        let len = len as u32;
        let columns = len.min(MAX_COLUMNS);
        let rows = len.div_ceil(columns);

        Ok(Self {
            columns,
            rows,
            width: (SWATCH_WIDTH + PADDING) * columns + PADDING,
            height: (SWATCH_HEIGHT + PADDING + LABEL_HEIGHT) * rows + PADDING * 2,
        })
    }

    /// Top-left corner of swatch `index`.
    pub fn swatch_origin(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        let row = index / self.columns;
        let col = index % self.columns;
        let x = PADDING + col * (SWATCH_WIDTH + PADDING);
        let y = PADDING + LABEL_HEIGHT + row * (SWATCH_HEIGHT + PADDING + LABEL_HEIGHT);
        (x, y)
    }
}

pub fn background(theme: Theme) -> Rgb {
    match theme {
        Theme::Light => hex_to_rgb(LIGHT_BACKGROUND),
        Theme::Dark => hex_to_rgb(DARK_BACKGROUND),
    }
}

/// Ink for the title and labels: the other theme's background.
pub fn text_color(theme: Theme) -> Rgb {
    background(theme.toggle())
}

/// File name offered for a download, e.g. `tints-palette.png`.
pub fn default_file_name(palette_type: PaletteType) -> String {
    format!("{palette_type}-palette.png")
}

fn pixel(rgb: Rgb) -> Pixel<u8> {
    Pixel(rgb.channels())
}

/// Alpha-blend `ink` over `under` with glyph coverage `alpha`.
fn blend(under: Pixel<u8>, ink: Rgb, alpha: u8) -> Pixel<u8> {
    let a = f64::from(alpha) / 255.0;
    let [r, g, b] = under.0;
    let mix = |u: u8, o: u8| f64::from(u) + (f64::from(o) - f64::from(u)) * a;
    pixel(Rgb::from_channels(mix(r, ink.r), mix(g, ink.g), mix(b, ink.b)))
}

/// Rasterizes single-line text straight into an image.
struct TextPainter {
    font: Font,
}

impl TextPainter {
    fn new() -> Result<Self> {
        let font = Font::from_bytes(epaint_default_fonts::UBUNTU_LIGHT, FontSettings::default())
            .map_err(SwatchError::Font)?;
        Ok(Self { font })
    }

    fn advance(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
    }

    /// Draws `text` centered on `center_x` with its baseline on row `baseline`.
    fn draw_centered(
        &self,
        img: &mut RgbImage,
        text: &str,
        px: f32,
        (center_x, baseline): (f32, u32),
        ink: Rgb,
    ) {
        let (width, height) = (i64::from(img.width()), i64::from(img.height()));
        let mut pen = center_x - self.advance(text, px) / 2.0;

        for ch in text.chars() {
            let (m, coverage) = self.font.rasterize(ch, px);
            let left = pen.round() as i64 + i64::from(m.xmin);
            let top = i64::from(baseline) - m.height as i64 - i64::from(m.ymin);

            for (i, &alpha) in coverage.iter().enumerate() {
                let x = left + (i % m.width) as i64;
                let y = top + (i / m.width) as i64;
                if alpha == 0 || !(0..width).contains(&x) || !(0..height).contains(&y) {
                    continue;
                }
                let p = img.get_pixel_mut(x as u32, y as u32);
                *p = blend(*p, ink, alpha);
            }
            pen += m.advance_width;
        }
    }
}

pub fn render(palette: &Palette, theme: Theme) -> Result<RgbImage> {
    let layout = GridLayout::for_len(palette.len())?;
    let mut img = RgbImage::from_pixel(layout.width, layout.height, pixel(background(theme)));

    for (i, &color) in palette.colors().iter().enumerate() {
        let (x0, y0) = layout.swatch_origin(i);
        let px = pixel(color);
        for y in y0..y0 + SWATCH_HEIGHT {
            for x in x0..x0 + SWATCH_WIDTH {
                img.put_pixel(x, y, px);
            }
        }
    }

    let text = TextPainter::new()?;
    let ink = text_color(theme);
    text.draw_centered(
        &mut img,
        &palette.title(),
        TITLE_PX,
        (layout.width as f32 / 2.0, PADDING + TEXT_BASELINE),
        ink,
    );
    for (i, label) in palette.labels().iter().enumerate() {
        let (x0, y0) = layout.swatch_origin(i);
        let center_x = (x0 + SWATCH_WIDTH / 2) as f32;
        let baseline = y0 + SWATCH_HEIGHT + TEXT_BASELINE;
        text.draw_centered(&mut img, label, LABEL_PX, (center_x, baseline), ink);
    }

    Ok(img)
}

/// Writes the rendered grid as PNG whatever the path's extension says.
pub fn export_png(palette: &Palette, theme: Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let img = render(palette, theme)?;
    img.save_with_format(path, ImageFormat::Png)?;

    tracing::info!(
        "exported {} ({} colors, {}x{}) to {}",
        palette.title(),
        palette.len(),
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}
