//! Hoverboard - region highlighting driven by a finite-state machine.
//!
//! The canvas is split into four regions. A global state hit-tests the
//! mouse every tick and asks the [`state::StateMachine`] to switch to the
//! animate state of whichever region the mouse entered; that state animates
//! its region's color while the others stay put.
//!
//! The crate is host-agnostic: states draw through [`render::Surface`], and
//! the gpui binary replays a recorded [`render::DisplayList`] each frame.

pub mod app;
pub mod constants;
pub mod perf;
pub mod region;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod state;
pub mod types;
