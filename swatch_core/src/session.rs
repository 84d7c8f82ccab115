use rand::Rng;

use crate::Result;
use crate::color::{Rgb, random_rgb};
use crate::input::{clamp_count, parse_hex};
use crate::palette::{Palette, PaletteType};
use crate::settings::{Settings, Theme};

/// The live state behind a front end: current inputs and the palette
/// derived from them.
///
/// Every input change recomputes the palette before returning, so
/// `palette()` is always consistent with `settings()`.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    base: Rgb,
    palette: Palette,
}

impl Session {
    /// Start from `settings`, rejecting a malformed base and clamping the count.
    pub fn new(mut settings: Settings) -> Result<Self> {
        let base = parse_hex(&settings.base)?;
        settings.base = base.to_string();
        settings.count = clamp_count(settings.count);

        let palette = settings.palette_type.generate(base, settings.count);
        Ok(Self {
            settings,
            base,
            palette,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn count(&self) -> usize {
        self.settings.count
    }

    pub fn palette_type(&self) -> PaletteType {
        self.settings.palette_type
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// On error the previous base stays in place.
    pub fn set_base(&mut self, hex: &str) -> Result<()> {
        let base = parse_hex(hex)?;
        self.set_base_rgb(base);
        Ok(())
    }

    pub fn set_base_rgb(&mut self, base: Rgb) {
        self.base = base;
        self.settings.base = base.to_string();
        self.recompute();
    }

    /// Returns the count actually used after clamping.
    pub fn set_count(&mut self, count: usize) -> usize {
        self.settings.count = clamp_count(count);
        self.recompute();
        self.settings.count
    }

    pub fn set_palette_type(&mut self, palette_type: PaletteType) {
        self.settings.palette_type = palette_type;
        self.recompute();
    }

    /// Pick a random base color and return it.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Rgb {
        let base = random_rgb(rng);
        self.set_base_rgb(base);
        base
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggle();
        self.settings.theme
    }

    fn recompute(&mut self) {
        self.palette = self
            .settings
            .palette_type
            .generate(self.base, self.settings.count);
        tracing::debug!(
            base = %self.base,
            count = self.settings.count,
            palette_type = %self.settings.palette_type,
            "palette recomputed"
        );
    }
}
