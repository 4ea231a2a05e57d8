//! Test helpers for driving the application tick by tick.

use hoverboard::app::HoverApp;
use hoverboard::render::DisplayList;
use hoverboard::settings::Settings;
use hoverboard::types::{RegionId, Rgb};

/// Application with the default 800x400 layout.
pub fn default_app() -> HoverApp {
    HoverApp::new(&Settings::default())
}

/// Run one tick with the mouse at `(x, y)` and return what was drawn.
pub fn tick_at(app: &mut HoverApp, x: f32, y: f32) -> DisplayList {
    let mut list = DisplayList::new();
    app.tick((x, y), &mut list).unwrap();
    list
}

/// Run `count` ticks with the mouse held at `(x, y)`.
pub fn hold_at(app: &mut HoverApp, x: f32, y: f32, count: usize) -> DisplayList {
    let mut list = DisplayList::new();
    for _ in 0..count {
        list = tick_at(app, x, y);
    }
    list
}

/// The scene journal as display strings, oldest first.
pub fn journal_lines(app: &HoverApp) -> Vec<String> {
    app.scene().journal().iter().map(|event| event.to_string()).collect()
}

pub fn current_color(app: &HoverApp, region: RegionId) -> Rgb {
    app.scene().region(region).current_color()
}

/// Assert every region except `animating` is at its idle color.
pub fn assert_idle_except(app: &HoverApp, animating: Option<RegionId>) {
    for region in app.scene().regions() {
        if Some(region.id()) == animating {
            continue;
        }
        assert_eq!(
            region.current_color(),
            region.idle_color(),
            "{} should be idle",
            region.id()
        );
    }
}
