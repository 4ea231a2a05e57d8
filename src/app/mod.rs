//! Application module - the hoverboard application state.
//!
//! - `scene` - regions, hovered region, mouse and journal (what states see)
//! - `lifecycle` - `HoverApp` construction and the per-frame tick

mod lifecycle;
mod scene;

pub use lifecycle::HoverApp;
pub use scene::Scene;
