//! Region animate states - one per canvas region.

use super::{State, StateEvent, StateId, announce};
use crate::app::Scene;
use crate::render::Surface;
use crate::types::RegionId;

/// Animates its own region toward the active color and draws the other
/// regions as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionAnimateState {
    region: RegionId,
}

impl RegionAnimateState {
    pub const fn new(region: RegionId) -> Self {
        Self { region }
    }
}

impl State for RegionAnimateState {
    fn id(&self) -> StateId {
        StateId::animate(self.region)
    }

    fn exit(&self, scene: &mut Scene) {
        announce(scene, StateEvent::Exited(self.id()));
        scene.region_mut(self.region).reset_color();
    }

    fn execute(&self, scene: &mut Scene, surface: &mut dyn Surface) -> Option<StateId> {
        for region in scene.regions_mut() {
            if region.id() == self.region {
                region.update();
            }
            region.draw(surface);
        }
        None
    }
}
