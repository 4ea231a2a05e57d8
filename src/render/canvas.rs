//! Canvas rendering - replays a recorded tick onto the gpui window.
//!
//! The state machine draws into a [`DisplayList`] during `render`; this
//! module turns that list into GPU quads inside a `canvas` element's paint
//! callback. Coordinates in the list are canvas pixels, offset by the
//! element's origin when painted.

use crate::profile_scope;
use crate::render::{DisplayList, DrawCommand};
use crate::types::{RegionBounds, Rgb};
use gpui::*;

/// Convert a canvas color to a gpui color.
pub fn to_hsla(color: Rgb) -> Hsla {
    Hsla::from(Rgba {
        r: color.r / 255.0,
        g: color.g / 255.0,
        b: color.b / 255.0,
        a: 1.0,
    })
}

fn to_pixel_bounds(bounds: &RegionBounds, origin: Point<Pixels>) -> Bounds<Pixels> {
    Bounds::new(
        point(origin.x + px(bounds.min_x), origin.y + px(bounds.min_y)),
        size(px(bounds.width()), px(bounds.height())),
    )
}

/// Render the region canvas for one tick.
pub fn render_canvas(list: DisplayList) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_display_list(bounds, window, &list);
        },
    )
    .absolute()
    .size_full()
}

fn paint_display_list(bounds: Bounds<Pixels>, window: &mut Window, list: &DisplayList) {
    profile_scope!("paint_display_list");

    for command in list.commands() {
        match command {
            DrawCommand::Clear { color } => {
                window.paint_quad(fill(bounds, to_hsla(*color)));
            }
            DrawCommand::FillRect { bounds: rect, color } => {
                window.paint_quad(fill(to_pixel_bounds(rect, bounds.origin), to_hsla(*color)));
            }
        }
    }

    tracing::trace!(commands = list.len(), "Painted display list");
}
