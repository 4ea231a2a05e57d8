//! User settings - canvas size, animation speed and region palette.
//!
//! Settings are read once at startup from `settings.json` in the platform
//! config directory (or the path in `HOVERBOARD_SETTINGS`). Every field has
//! a default, so a partial file only overrides what it names. A missing
//! file is not an error; an unreadable or invalid one is logged and the
//! defaults are used instead.

use crate::constants::*;
use crate::types::{RegionId, Rgb};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error reading the settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a field of the wrong shape (including bad colors)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Canvas must have a non-zero size
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Animation step must be a positive, finite number
    #[error("Invalid animation step: {0}")]
    InvalidAnimationStep(f32),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Idle and active color of one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionColors {
    pub idle: Rgb,
    pub active: Rgb,
}

impl RegionColors {
    pub const fn new(idle: Rgb, active: Rgb) -> Self {
        Self { idle, active }
    }
}

/// Colors for all four regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionPalette {
    pub upper_left: RegionColors,
    pub upper_right: RegionColors,
    pub lower_left: RegionColors,
    pub lower_right: RegionColors,
}

impl Default for RegionPalette {
    fn default() -> Self {
        Self {
            upper_left: RegionColors::new(UPPER_LEFT_IDLE, UPPER_LEFT_ACTIVE),
            upper_right: RegionColors::new(UPPER_RIGHT_IDLE, UPPER_RIGHT_ACTIVE),
            lower_left: RegionColors::new(LOWER_LEFT_IDLE, LOWER_LEFT_ACTIVE),
            lower_right: RegionColors::new(LOWER_RIGHT_IDLE, LOWER_RIGHT_ACTIVE),
        }
    }
}

impl RegionPalette {
    pub fn colors_for(&self, region: RegionId) -> RegionColors {
        match region {
            RegionId::UpperLeft => self.upper_left,
            RegionId::UpperRight => self.upper_right,
            RegionId::LowerLeft => self.lower_left,
            RegionId::LowerRight => self.lower_right,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Maximum per-channel color change per tick
    pub animation_step: f32,
    pub background: Rgb,
    pub regions: RegionPalette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            animation_step: DEFAULT_ANIMATION_STEP,
            background: DEFAULT_BACKGROUND,
            regions: RegionPalette::default(),
        }
    }
}

impl Settings {
    /// Where settings are read from: `HOVERBOARD_SETTINGS` if set, else the
    /// platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("No config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SettingsError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !self.animation_step.is_finite() || self.animation_step <= 0.0 {
            return Err(SettingsError::InvalidAnimationStep(self.animation_step));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width as f32, self.canvas_height as f32)
    }
}
