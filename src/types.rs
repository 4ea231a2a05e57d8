//! Core value types for the hoverboard canvas.
//!
//! Colors, region identifiers and region bounds. Everything here is `Copy`
//! and free of host types so the state machine can be tested headless.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

// ============================================================================
// Color
// ============================================================================

/// An RGB color with channels in `0.0..=255.0`.
///
/// Channels are floats so a region can animate in sub-integer steps; the
/// host converts to its own color type when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a lowercase `#rrggbb` string, rounding each channel.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Channels rounded and clamped to 8 bits.
    pub fn to_u8(&self) -> [u8; 3] {
        let quantize = |c: f32| c.round().clamp(0.0, 255.0) as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Move each channel toward `target` by at most `|step|`, never past it.
    /// A zero or non-finite step jumps straight to `target`.
    pub fn step_toward(&self, target: Rgb, step: f32) -> Rgb {
        let step = step.abs();
        if step == 0.0 || !step.is_finite() {
            return target;
        }
        let approach = |from: f32, to: f32| {
            let delta = to - from;
            if delta.abs() <= step {
                to
            } else {
                from + step.copysign(delta)
            }
        };
        Rgb::new(
            approach(self.r, target.r),
            approach(self.g, target.g),
            approach(self.b, target.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Colors are stored as `#rrggbb` strings in the settings file.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgb::from_hex(&hex)
            .ok_or_else(|| de::Error::custom(format!("invalid color '{}', expected #rrggbb", hex)))
    }
}

// ============================================================================
// Region Identifiers
// ============================================================================

/// One of the four canvas quadrants.
///
/// The declaration order is the hit-test scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl RegionId {
    /// All regions in scan order.
    pub const ALL: [RegionId; 4] = [
        RegionId::UpperLeft,
        RegionId::UpperRight,
        RegionId::LowerLeft,
        RegionId::LowerRight,
    ];

    /// Position in scan order, also the index into the scene's region array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegionId::UpperLeft => "UpperLeft",
            RegionId::UpperRight => "UpperRight",
            RegionId::LowerLeft => "LowerLeft",
            RegionId::LowerRight => "LowerRight",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned rectangle in canvas pixels.
///
/// Left and top edges are inclusive. Right and bottom edges are exclusive,
/// except where they lie on the canvas border (`closed_right` /
/// `closed_bottom`), so adjacent regions never both claim a shared edge and
/// the canvas border still belongs to someone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub closed_right: bool,
    pub closed_bottom: bool,
}

impl RegionBounds {
    /// Bounds with both far edges exclusive.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            closed_right: false,
            closed_bottom: false,
        }
    }

    /// Close the far edges that coincide with the canvas border.
    pub fn clamped_to_canvas(mut self, canvas_width: f32, canvas_height: f32) -> Self {
        self.closed_right = self.max_x >= canvas_width;
        self.closed_bottom = self.max_y >= canvas_height;
        self
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let within_x = x >= self.min_x && (x < self.max_x || (self.closed_right && x == self.max_x));
        let within_y = y >= self.min_y && (y < self.max_y || (self.closed_bottom && y == self.max_y));
        within_x && within_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
