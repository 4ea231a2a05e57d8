//! Application lifecycle - the setup hook and the per-frame hook.

use super::Scene;
use crate::profile_scope;
use crate::render::Surface;
use crate::settings::Settings;
use crate::state::{StateId, StateMachine, StateMachineResult, state_for};
use crate::types::Rgb;

/// The hoverboard application: a scene driven by a state machine.
///
/// The application itself has no logic for the visuals; everything happens
/// in the states.
#[derive(Debug)]
pub struct HoverApp {
    scene: Scene,
    machine: StateMachine,
    background: Rgb,
    frame_count: u64,
}

impl HoverApp {
    /// Build the regions and the machine. The machine starts in the
    /// upper-left animate state, matching the initially hovered region.
    pub fn new(settings: &Settings) -> Self {
        let scene = Scene::new(settings);

        let mut machine = StateMachine::new();
        machine.set_global_state(state_for(StateId::Global));
        machine.set_current_state(state_for(StateId::animate(scene.hovered())));

        tracing::debug!(
            width = settings.canvas_width,
            height = settings.canvas_height,
            "Created hoverboard scene"
        );

        Self {
            scene,
            machine,
            background: settings.background,
            frame_count: 0,
        }
    }

    /// Run one frame: clear the surface, then update the state machine with
    /// the mouse position observed for this frame.
    pub fn tick(&mut self, mouse: (f32, f32), surface: &mut dyn Surface) -> StateMachineResult<()> {
        profile_scope!("hoverboard_tick");

        self.frame_count += 1;
        self.scene.set_mouse(mouse.0, mouse.1);
        surface.clear(self.background);
        self.machine.update(&mut self.scene, surface)?;

        tracing::trace!(
            frame = self.frame_count,
            state = ?self.machine.current_state(),
            "Tick"
        );
        Ok(())
    }

    /// Switch the machine to the state `id`.
    pub fn change_state(&mut self, id: StateId) -> StateMachineResult<()> {
        self.machine.change_state(state_for(id), &mut self.scene)
    }

    pub fn revert_to_previous_state(&mut self) -> StateMachineResult<()> {
        self.machine.revert_to_previous_state(&mut self.scene)
    }

    pub fn is_in_state(&self, id: StateId) -> bool {
        self.machine.is_in_state(id)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
