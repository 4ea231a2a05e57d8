//! Rendering - the host drawing boundary and the gpui painter.
//!
//! - `surface` - the `Surface` trait the states draw through, and the
//!   recording `DisplayList`
//! - `canvas` - paints a `DisplayList` with gpui

pub mod canvas;
mod surface;

pub use surface::{DisplayList, DrawCommand, Surface};
