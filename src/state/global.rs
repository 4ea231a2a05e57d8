//! Global state - hit testing and transition requests.

use super::{State, StateId};
use crate::app::Scene;
use crate::render::Surface;

/// Runs every tick before the current state.
///
/// Checks whether the mouse left the hovered region and, if it entered
/// another one, asks the machine for that region's animate state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalState;

impl State for GlobalState {
    fn id(&self) -> StateId {
        StateId::Global
    }

    // The global state never occupies the current slot, so it stays quiet.
    fn enter(&self, _scene: &mut Scene) {}

    fn exit(&self, _scene: &mut Scene) {}

    fn execute(&self, scene: &mut Scene, _surface: &mut dyn Surface) -> Option<StateId> {
        let (x, y) = scene.mouse();

        if scene.hovered_region().contains(x, y) {
            return None;
        }

        // Outside the canvas: keep the last hovered region.
        let region = scene.region_at(x, y)?;
        tracing::debug!(from = %scene.hovered(), to = %region, x, y, "Mouse changed region");
        scene.set_hovered(region);
        Some(StateId::animate(region))
    }
}
