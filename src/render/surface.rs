//! Drawing boundary between the state machine and the host.

use crate::types::{RegionBounds, Rgb};

/// The drawing primitives the host provides.
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, bounds: &RegionBounds, color: Rgb);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { color: Rgb },
    FillRect { bounds: RegionBounds, color: Rgb },
}

/// A `Surface` that records commands for later painting.
///
/// The gpui host records one tick into a list and replays it inside its
/// paint callback; tests inspect the list directly.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The color of the last fill whose bounds contain `(x, y)`, or the
    /// clear color if none does.
    pub fn color_at(&self, x: f32, y: f32) -> Option<Rgb> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::FillRect { bounds, color } if bounds.contains(x, y) => Some(*color),
            DrawCommand::Clear { color } => Some(*color),
            DrawCommand::FillRect { .. } => None,
        })
    }

    /// Summaries like `fill #ffffff 0,0 400x200`, one per command.
    pub fn describe(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|command| match command {
                DrawCommand::Clear { color } => format!("clear {}", color),
                DrawCommand::FillRect { bounds, color } => format!(
                    "fill {} {},{} {}x{}",
                    color,
                    bounds.min_x,
                    bounds.min_y,
                    bounds.width(),
                    bounds.height()
                ),
            })
            .collect()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Rgb) {
        // Everything before a clear is invisible.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, bounds: &RegionBounds, color: Rgb) {
        self.commands.push(DrawCommand::FillRect {
            bounds: *bounds,
            color,
        });
    }
}
