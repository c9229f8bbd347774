//! Startup configuration.

use crate::error::*;
use crate::geo::Size;

use log::info;
use serde::{ Deserialize, Serialize };

use std::fs;
use std::io;
use std::path::{ Path, PathBuf };

/// The largest hex radius whose rendered image still fits the
/// texture size limit of `u16::MAX` pixels per axis.
pub const MAX_HEX_RADIUS: u32 = (u16::MAX as u32 - 1) / 2;

/// Settings fixed for the duration of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The size of the drawable area in pixels.
    pub viewport: (u32, u32),
    /// The maximum number of frames per second, `0` for no limit.
    pub max_fps: u32,
    /// The distance from the center to any corner of a tile.
    pub hex_radius: u32,
    pub font_size: f32,
    pub fullscreen: bool,
    /// The directory the asset paths are relative to.
    pub resources: PathBuf,
    pub assets: AssetPaths,
}

/// Asset locations within the resource directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub ground_tile: String,
    pub font: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            viewport: (3840, 2160),
            max_fps: 60,
            hex_radius: 150,
            font_size: 24.,
            fullscreen: true,
            resources: PathBuf::from("media"),
            assets: AssetPaths::default(),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            background: "/images/starfield.png".to_string(),
            ground_tile: "/images/ground_tile_lowres.jpg".to_string(),
            font: "/fonts/monospace.ttf".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from a RON file. Settings missing from
    /// the file take their default values, as do all settings if there
    /// is no such file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let config_err = |source| Error::Config { path: path.to_owned(), source };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No configuration at {}, using defaults", path.display());
                return Ok(Config::default())
            }
            Err(e) => return Err(config_err(ConfigError::from(e)))
        };
        let config = Config::parse(&text).map_err(|e| config_err(ConfigError::from(e)))?;
        config.validate().map_err(config_err)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the settings that have a limited range.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.hex_radius == 0 || self.hex_radius > MAX_HEX_RADIUS {
            return Err(ConfigError::HexRadius(self.hex_radius))
        }
        Ok(())
    }

    pub fn parse(text: &str) -> std::result::Result<Config, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn viewport_size(&self) -> Size {
        Size::new(self.viewport.0 as f32, self.viewport.1 as f32)
    }
}
