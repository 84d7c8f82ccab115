use anyhow::Context;
use eframe::egui;
use std::time::{Duration, Instant};
use swatch_core::export::{default_file_name, export_png};
use swatch_core::settings::DEFAULT_SETTINGS_FILE;
use swatch_core::{
    MAX_COUNT, MIN_COUNT, PaletteType, Rgb, Session, Settings, Theme, contrast_text, sanitize_hex,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SWATCH_SIZE: egui::Vec2 = egui::vec2(110.0, 96.0);
const COPIED_FOR: Duration = Duration::from_secs(2);

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Color Palette Generator",
        options,
        Box::new(|cc| {
            let app = SwatchApp::new(settings_path)?;
            cc.egui_ctx.set_visuals(visuals(app.session.theme()));
            Ok(Box::new(app))
        }),
    )
}

struct SwatchApp {
    settings_path: String,
    session: Session,

    // UI state
    hex_field: String,
    picker: [u8; 3],
    copied: Option<(usize, Instant)>,
    status: Option<String>,
    last_error: Option<String>,
}

impl SwatchApp {
    fn new(settings_path: String) -> anyhow::Result<Self> {
        let settings = Settings::load_or_default(&settings_path)?;
        let session = Session::new(settings)
            .with_context(|| format!("bad base color in {settings_path}"))?;

        let base = session.base();
        Ok(Self {
            settings_path,
            hex_field: hex_digits(base),
            picker: base.channels(),
            session,
            copied: None,
            status: None,
            last_error: None,
        })
    }

    fn set_base(&mut self, base: Rgb) {
        self.session.set_base_rgb(base);
        self.hex_field = hex_digits(base);
        self.picker = base.channels();
        self.last_error = None;
    }

    fn on_hex_edited(&mut self) {
        self.hex_field = clean_hex_field(&self.hex_field);
        // wait for all six digits before touching the palette
        if self.hex_field.len() == 6 {
            match self.session.set_base(&self.hex_field) {
                Ok(()) => {
                    self.picker = self.session.base().channels();
                    self.last_error = None;
                }
                Err(e) => self.last_error = Some(e.to_string()),
            }
        }
    }

    fn safe_export(&mut self) {
        let path = default_file_name(self.session.palette_type());
        match export_png(self.session.palette(), self.session.theme(), &path) {
            Ok(()) => self.status = Some(format!("Saved {path}")),
            Err(e) => self.last_error = Some(format!("{e:#}")),
        }
    }

    fn safe_save_settings(&mut self) {
        match self.session.settings().save_json_file(&self.settings_path) {
            Ok(()) => self.status = Some(format!("Saved settings to {}", self.settings_path)),
            Err(e) => self.last_error = Some(format!("{e:#}")),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Color Palette Generator");
            ui.separator();

            let theme_label = match self.session.theme() {
                Theme::Light => "🌙 Dark",
                Theme::Dark => "☀ Light",
            };
            if ui.button(theme_label).clicked() {
                let theme = self.session.toggle_theme();
                ui.ctx().set_visuals(visuals(theme));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Base color:");
            if ui.color_edit_button_srgb(&mut self.picker).changed() {
                self.set_base(Rgb::from(self.picker));
            }

            ui.label("#");
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.hex_field)
                    .char_limit(6)
                    .desired_width(70.0),
            );
            if edit.changed() {
                self.on_hex_edited();
            }

            if ui.button("🔄 Random").clicked() {
                let base = self.session.randomize(&mut rand::rng());
                self.set_base(base);
            }

            ui.separator();

            let mut count = self.session.count();
            let slider = egui::Slider::new(&mut count, MIN_COUNT..=MAX_COUNT).text("Palette size");
            if ui.add(slider).changed() {
                self.session.set_count(count);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Palette type:");
            for t in PaletteType::ALL {
                let selected = self.session.palette_type() == t;
                if ui.selectable_label(selected, t.label()).clicked() && !selected {
                    self.session.set_palette_type(t);
                }
            }

            ui.separator();

            if ui.button("⬇ Download palette").clicked() {
                self.safe_export();
            }
            if ui.button("Save settings").clicked() {
                self.safe_save_settings();
            }
        });

        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::RED, format!("Error: {err}"));
        } else if let Some(status) = &self.status {
            ui.label(status);
        }
    }

    fn swatches(&mut self, ui: &mut egui::Ui) {
        let copied_index = match self.copied {
            Some((i, at)) if at.elapsed() < COPIED_FOR => Some(i),
            _ => None,
        };

        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);

            for (i, &color) in self.session.palette().colors().iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::click());
                let painter = ui.painter();

                painter.rect_filled(rect, 6.0, color32(color));
                if response.hovered() {
                    painter.rect_filled(rect, 6.0, egui::Color32::from_black_alpha(24));
                }

                let label = if copied_index == Some(i) {
                    "Copied!".to_string()
                } else {
                    color.to_string()
                };
                painter.text(
                    rect.center_bottom() - egui::vec2(0.0, 14.0),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(14.0),
                    color32(contrast_text(color)),
                );

                if response
                    .on_hover_text("Click to copy color code")
                    .clicked()
                {
                    clicked = Some((i, color));
                }
            }
        });

        if let Some((i, color)) = clicked {
            ui.ctx().copy_text(color.to_string());
            self.copied = Some((i, Instant::now()));
            ui.ctx().request_repaint_after(COPIED_FOR);
        }
    }
}

impl eframe::App for SwatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.session.palette().title());
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.swatches(ui);
            });
        });
    }
}

fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// The text field holds the digits only; the `#` is drawn beside it.
fn hex_digits(rgb: Rgb) -> String {
    rgb.to_string().trim_start_matches('#').to_string()
}

fn clean_hex_field(raw: &str) -> String {
    sanitize_hex(raw).trim_start_matches('#').to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_field_keeps_only_six_digits() {
        assert_eq!(clean_hex_field("#63-66-f1"), "6366F1");
        assert_eq!(clean_hex_field("6366f1ff"), "6366F1");
        assert_eq!(clean_hex_field("zz"), "");
    }

    #[test]
    fn hex_digits_drops_the_hash() {
        assert_eq!(hex_digits(Rgb::new(0x63, 0x66, 0xF1)), "6366F1");
    }

    #[test]
    fn color32_copies_channels() {
        assert_eq!(
            color32(Rgb::new(1, 2, 3)),
            egui::Color32::from_rgb(1, 2, 3)
        );
    }

    #[test]
    fn theme_maps_to_visuals() {
        assert!(visuals(Theme::Dark).dark_mode);
        assert!(!visuals(Theme::Light).dark_mode);
    }
}
