//! Application-wide constants.
//!
//! Centralizes magic numbers and default values so the setup hook and the
//! settings loader agree on them.

use crate::types::Rgb;

// ============================================================================
// Canvas Layout
// ============================================================================

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

// ============================================================================
// Animation
// ============================================================================

/// Maximum change per color channel per tick while a region animates
pub const DEFAULT_ANIMATION_STEP: f32 = 5.0;

/// Number of state events kept in the scene journal
pub const MAX_JOURNAL_EVENTS: usize = 64;

// ============================================================================
// Colors
// ============================================================================

/// Canvas background, cleared at the start of every tick
pub const DEFAULT_BACKGROUND: Rgb = Rgb::WHITE;

pub const UPPER_LEFT_IDLE: Rgb = Rgb::BLACK;
pub const UPPER_LEFT_ACTIVE: Rgb = Rgb::WHITE;

pub const UPPER_RIGHT_IDLE: Rgb = Rgb::WHITE;
pub const UPPER_RIGHT_ACTIVE: Rgb = Rgb::BLACK;

pub const LOWER_LEFT_IDLE: Rgb = Rgb::from_u8(200, 0, 0);
pub const LOWER_LEFT_ACTIVE: Rgb = Rgb::from_u8(0, 200, 0);

pub const LOWER_RIGHT_IDLE: Rgb = Rgb::from_u8(0, 200, 0);
pub const LOWER_RIGHT_ACTIVE: Rgb = Rgb::from_u8(200, 0, 0);

// ============================================================================
// Settings
// ============================================================================

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV_VAR: &str = "HOVERBOARD_SETTINGS";

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "hoverboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
