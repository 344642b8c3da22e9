// src/config/settings.rs
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "SCRAP_DASHBOARD";
const SETTINGS_FILE: &str = "settings.ron";
const APP_DIR: &str = "scrap-dashboard";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Source(#[from] ::config::ConfigError),
    #[error("{field} must be at least 1")]
    ZeroValue { field: &'static str },
    #[error("Invalid bar colour {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// Dashboard settings. Every field has a default so any layer may be partial.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset_path: PathBuf,
    pub top_n: usize,
    pub page_size: usize,
    pub window_title: String,
    pub bar_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("assets/RegistrosDeScrapB1.csv"),
            top_n: 10,
            page_size: 5,
            window_title: "Scrap_B1".to_string(),
            bar_color: "#47A8E5".to_string(),
        }
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

impl Settings {
    /// Defaults, then the settings file (explicit path or the platform
    /// default, optional unless given explicitly), then the environment.
    /// Not validated: command-line overrides still have to be applied.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(config_file: Option<&Path>, env: Environment) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(
                    File::new(&path.to_string_lossy(), FileFormat::Ron).required(true),
                );
            }
            None => {
                if let Some(path) = default_settings_path() {
                    builder = builder.add_source(
                        File::new(&path.to_string_lossy(), FileFormat::Ron).required(false),
                    );
                }
            }
        }

        let settings = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.top_n == 0 {
            return Err(SettingsError::ZeroValue { field: "top_n" });
        }
        if self.page_size == 0 {
            return Err(SettingsError::ZeroValue { field: "page_size" });
        }
        if parse_hex_color(&self.bar_color).is_none() {
            return Err(SettingsError::InvalidColor(self.bar_color.clone()));
        }
        Ok(())
    }

    pub fn bar_rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.bar_color).unwrap_or([0x47, 0xA8, 0xE5])
    }
}

pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
