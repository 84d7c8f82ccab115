use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::SwatchError;
use crate::palette::PaletteType;

pub const DEFAULT_BASE: &str = "#6366F1";
pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_SETTINGS_FILE: &str = "swatch.json";

/// Light or dark presentation. Only rendering looks at this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(SwatchError::UnknownTheme {
                name: s.to_string(),
            }),
        }
    }
}

/// The inputs a palette is derived from, plus the display theme.
/// This is what we save/load; generated colors are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base: String,
    pub count: usize,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            count: DEFAULT_COUNT,
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Save the settings to JSON.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize settings to json")?;
        fs::write(path.as_ref(), json).context("write settings json file")?;
        Ok(())
    }

    /// Load the settings from JSON. Missing fields take their defaults.
    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read settings json file")?;
        let settings = serde_json::from_str::<Settings>(&text).context("parse settings json")?;
        Ok(settings)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_json_file(path)
                .with_context(|| format!("load settings file: {}", path.display()))
        } else {
            tracing::debug!("no settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("swatch-{}-{name}", std::process::id()))
    }

    #[test]
    fn defaults_match_first_launch() {
        let s = Settings::default();
        assert_eq!(s.base, "#6366F1");
        assert_eq!(s.count, 10);
        assert_eq!(s.palette_type, PaletteType::Monochromatic);
        assert_eq!(s.theme, Theme::Light);
    }

    #[test]
    fn json_round_trip() -> anyhow::Result<()> {
        let path = temp_path("round-trip.json");
        let s = Settings {
            base: "#10B981".into(),
            count: 24,
            palette_type: PaletteType::Tones,
            theme: Theme::Dark,
        };

        s.save_json_file(&path)?;
        let loaded = Settings::load_json_file(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(loaded, s);
        Ok(())
    }

    #[test]
    fn missing_fields_fall_back() -> anyhow::Result<()> {
        let s: Settings = serde_json::from_str(r#"{ "palette_type": "tints" }"#)?;
        assert_eq!(s.palette_type, PaletteType::Tints);
        assert_eq!(s.base, DEFAULT_BASE);
        assert_eq!(s.count, DEFAULT_COUNT);
        Ok(())
    }

    #[test]
    fn load_or_default_without_file() -> anyhow::Result<()> {
        let s = Settings::load_or_default(temp_path("does-not-exist.json"))?;
        assert_eq!(s, Settings::default());
        Ok(())
    }

    #[test]
    fn theme_toggles_and_parses() -> anyhow::Result<()> {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>()?, Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        Ok(())
    }
}
