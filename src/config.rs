//! Configuration file handling.
//!
//! Loads configuration from the platform config directory
//! (e.g. `~/.config/camsnap/config.toml`) or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ascii::CharSet;
use crate::camera::{Facing, Resolution};
use crate::snapshot::DEFAULT_JPEG_QUALITY;

/// Configuration file structure.
/// Loaded from the platform config dir (or a custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    /// Explicit device index; facing preference picks one when unset
    #[serde(default)]
    pub device: Option<u32>,
    /// "user" or "environment"
    #[serde(default)]
    pub facing: Option<String>,
    /// Requested resolution, "WIDTHxHEIGHT"
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default = "default_true")]
    pub mirror: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: None,
            facing: None,
            resolution: None,
            mirror: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PreviewConfig {
    /// "standard", "blocks" or "minimal"
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Deserialize)]
pub struct CaptureConfig {
    /// JPEG quality, 1-100
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Directory captures are written to (default: current directory)
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            output: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { status_bar: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Facing preference from the config, if valid.
    pub fn facing(&self) -> Option<Facing> {
        match self.camera.facing.as_deref() {
            Some("user") => Some(Facing::User),
            Some("environment") => Some(Facing::Environment),
            _ => None,
        }
    }

    /// Requested resolution from the config, if valid.
    pub fn resolution(&self) -> Option<Resolution> {
        parse_resolution(self.camera.resolution.as_deref()?).ok()
    }

    /// Preview charset from the config, if valid.
    pub fn charset(&self) -> Option<CharSet> {
        match self.preview.charset.as_deref() {
            Some("standard") => Some(CharSet::Standard),
            Some("blocks") => Some(CharSet::Blocks),
            Some("minimal") => Some(CharSet::Minimal),
            _ => None,
        }
    }
}

/// Parse a "WIDTHxHEIGHT" resolution string.
pub fn parse_resolution(s: &str) -> Result<Resolution, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid resolution '{}'. Expected WIDTHxHEIGHT, e.g. 1280x720",
            s
        ));
    }

    let width: u32 = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", parts[0]))?;
    let height: u32 = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a valid height", parts[1]))?;

    if width == 0 || height == 0 {
        return Err("Resolution dimensions must be non-zero".to_string());
    }

    Ok(Resolution { width, height })
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "camsnap", "camsnap")
        .map(|d| d.config_dir().to_path_buf().join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/camsnap/config.toml")
        })
}
