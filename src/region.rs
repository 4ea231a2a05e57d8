//! Canvas regions - hit-test areas with an animated fill color.

use crate::render::Surface;
use crate::types::{RegionBounds, RegionId, Rgb};

/// A rectangular hit-test area with idle and active colors.
///
/// `current_color` starts at `idle_color`, walks toward `active_color` while
/// the region is the animation target, and snaps back on `reset_color`.
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    bounds: RegionBounds,
    idle_color: Rgb,
    active_color: Rgb,
    current_color: Rgb,
    animation_step: f32,
}

impl Region {
    pub fn new(
        id: RegionId,
        bounds: RegionBounds,
        idle_color: Rgb,
        active_color: Rgb,
        animation_step: f32,
    ) -> Self {
        Self {
            id,
            bounds,
            idle_color,
            active_color,
            current_color: idle_color,
            animation_step,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn bounds(&self) -> &RegionBounds {
        &self.bounds
    }

    pub fn idle_color(&self) -> Rgb {
        self.idle_color
    }

    pub fn active_color(&self) -> Rgb {
        self.active_color
    }

    pub fn current_color(&self) -> Rgb {
        self.current_color
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }

    /// Advance one animation step toward the active color.
    pub fn update(&mut self) {
        if self.is_settled() {
            return;
        }
        self.current_color = self
            .current_color
            .step_toward(self.active_color, self.animation_step);
    }

    /// True once the animation has reached the active color.
    pub fn is_settled(&self) -> bool {
        self.current_color == self.active_color
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(&self.bounds, self.current_color);
    }

    /// Snap back to the idle color without animating.
    pub fn reset_color(&mut self) {
        self.current_color = self.idle_color;
    }
}
