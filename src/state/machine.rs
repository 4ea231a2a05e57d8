//! State machine - current/previous/global slots and transitions.

use super::{State, StateId, StateMachineError, StateMachineResult, state_for};
use crate::app::Scene;
use crate::profile_scope;
use crate::render::Surface;
use std::fmt;

/// Holds the current, previous and global states and carries out
/// transitions with exit-then-enter ordering.
///
/// Transitions are requested from outside (the global state returns the
/// next id from `execute`); the machine only performs them.
#[derive(Default)]
pub struct StateMachine {
    current: Option<&'static dyn State>,
    previous: Option<&'static dyn State>,
    global: Option<&'static dyn State>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    // The next three setters only initialize the machine; they run no
    // enter/exit hooks.

    pub fn set_current_state(&mut self, state: &'static dyn State) {
        self.current = Some(state);
    }

    pub fn set_previous_state(&mut self, state: &'static dyn State) {
        self.previous = Some(state);
    }

    pub fn set_global_state(&mut self, state: &'static dyn State) {
        self.global = Some(state);
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.current.map(|state| state.id())
    }

    pub fn previous_state(&self) -> Option<StateId> {
        self.previous.map(|state| state.id())
    }

    pub fn global_state(&self) -> Option<StateId> {
        self.global.map(|state| state.id())
    }

    /// Run one tick: the global state first, then the current state.
    ///
    /// A transition requested by the global state is applied before the
    /// current state executes, so the new state runs in the same tick.
    pub fn update(&mut self, scene: &mut Scene, surface: &mut dyn Surface) -> StateMachineResult<()> {
        profile_scope!("state_machine_update");

        if let Some(global) = self.global {
            if let Some(next) = global.execute(scene, surface) {
                self.change_state(state_for(next), scene)?;
            }
        }

        if let Some(current) = self.current {
            if let Some(next) = current.execute(scene, surface) {
                self.change_state(state_for(next), scene)?;
            }
        }

        Ok(())
    }

    /// Switch to `new_state`: record the previous state, exit the current
    /// one, then enter the new one.
    pub fn change_state(&mut self, new_state: &'static dyn State, scene: &mut Scene) -> StateMachineResult<()> {
        let current = self.current.ok_or(StateMachineError::Uninitialized)?;

        tracing::debug!(from = current.name(), to = new_state.name(), "Changing state");

        self.previous = Some(current);
        current.exit(scene);
        self.current = Some(new_state);
        new_state.enter(scene);
        Ok(())
    }

    /// Go back to the state that was current before the last transition.
    pub fn revert_to_previous_state(&mut self, scene: &mut Scene) -> StateMachineResult<()> {
        let previous = self.previous.ok_or(StateMachineError::NoPreviousState)?;
        self.change_state(previous, scene)
    }

    /// True if the current state is the variant `id`.
    pub fn is_in_state(&self, id: StateId) -> bool {
        self.current_state() == Some(id)
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current_state())
            .field("previous", &self.previous_state())
            .field("global", &self.global_state())
            .finish()
    }
}
