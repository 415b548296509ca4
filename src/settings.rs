use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub viz: VizSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct VizSettings {
    pub time: Option<f32>,      // Default animation step delay in seconds
    pub width: Option<usize>,   // Fixed raster width instead of terminal-derived
    pub height: Option<usize>,  // Fixed raster height instead of terminal-derived
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lifescreen")
            .join("config.toml")
    }
}
