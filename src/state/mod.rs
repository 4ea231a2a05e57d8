//! Region state machine - the states that drive the application.
//!
//! All application logic lives in the states; the host only forwards the
//! mouse position and paints what the states draw.
//!
//! ## State Transitions
//!
//! ```text
//! Global                        (runs every tick, outside current/previous)
//!
//! UpperLeftAnimate  <-> UpperRightAnimate
//!        ^    \           /    ^
//!        |     \         /     |
//!        v      \       /      v
//! LowerLeftAnimate  <-> LowerRightAnimate
//!
//! Any region state -> any other   (mouse enters that region)
//! ```
//!
//! ## Modules
//!
//! - `global` - hit testing and transition requests
//! - `region_animate` - per-region animation and drawing
//! - `machine` - current/previous/global slots and transition bookkeeping
//! - `error` - precondition violations

mod error;
mod global;
mod machine;
mod region_animate;

pub use error::{StateMachineError, StateMachineResult};
pub use global::GlobalState;
pub use machine::StateMachine;
pub use region_animate::RegionAnimateState;

use crate::app::Scene;
use crate::render::Surface;
use crate::types::RegionId;
use std::fmt;

/// Identifies a state variant. Equality on `StateId` is state equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Global,
    UpperLeftAnimate,
    UpperRightAnimate,
    LowerLeftAnimate,
    LowerRightAnimate,
}

impl StateId {
    /// The animate state responsible for `region`.
    pub const fn animate(region: RegionId) -> Self {
        match region {
            RegionId::UpperLeft => StateId::UpperLeftAnimate,
            RegionId::UpperRight => StateId::UpperRightAnimate,
            RegionId::LowerLeft => StateId::LowerLeftAnimate,
            RegionId::LowerRight => StateId::LowerRightAnimate,
        }
    }

    /// The region an animate state is bound to; `None` for the global state.
    pub const fn region(self) -> Option<RegionId> {
        match self {
            StateId::Global => None,
            StateId::UpperLeftAnimate => Some(RegionId::UpperLeft),
            StateId::UpperRightAnimate => Some(RegionId::UpperRight),
            StateId::LowerLeftAnimate => Some(RegionId::LowerLeft),
            StateId::LowerRightAnimate => Some(RegionId::LowerRight),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StateId::Global => "GlobalRegionState",
            StateId::UpperLeftAnimate => "UpperLeftAnimateState",
            StateId::UpperRightAnimate => "UpperRightAnimateState",
            StateId::LowerLeftAnimate => "LowerLeftAnimateState",
            StateId::LowerRightAnimate => "LowerRightAnimateState",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A transition announcement recorded in the scene journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    Entered(StateId),
    Exited(StateId),
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateEvent::Entered(id) => write!(f, "entering state {}", id),
            StateEvent::Exited(id) => write!(f, "exiting state {}", id),
        }
    }
}

/// Behavior shared by every state.
///
/// States carry no mutable data; everything they touch lives in the
/// [`Scene`]. One instance per variant exists, see [`state_for`].
pub trait State {
    fn id(&self) -> StateId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Runs once when the machine switches into this state.
    fn enter(&self, scene: &mut Scene) {
        announce(scene, StateEvent::Entered(self.id()));
    }

    /// Runs once when the machine switches away from this state.
    fn exit(&self, scene: &mut Scene) {
        announce(scene, StateEvent::Exited(self.id()));
    }

    /// Per-tick behavior. A returned id asks the machine to change to that
    /// state before the current state executes.
    fn execute(&self, scene: &mut Scene, surface: &mut dyn Surface) -> Option<StateId>;
}

/// Log a transition event and record it in the scene journal.
pub(crate) fn announce(scene: &mut Scene, event: StateEvent) {
    tracing::info!("{}", event);
    scene.record(event);
}

impl fmt::Debug for dyn State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Registry
// ============================================================================

static GLOBAL: GlobalState = GlobalState;
static UPPER_LEFT_ANIMATE: RegionAnimateState = RegionAnimateState::new(RegionId::UpperLeft);
static UPPER_RIGHT_ANIMATE: RegionAnimateState = RegionAnimateState::new(RegionId::UpperRight);
static LOWER_LEFT_ANIMATE: RegionAnimateState = RegionAnimateState::new(RegionId::LowerLeft);
static LOWER_RIGHT_ANIMATE: RegionAnimateState = RegionAnimateState::new(RegionId::LowerRight);

/// The shared instance for a state variant.
pub fn state_for(id: StateId) -> &'static dyn State {
    match id {
        StateId::Global => &GLOBAL,
        StateId::UpperLeftAnimate => &UPPER_LEFT_ANIMATE,
        StateId::UpperRightAnimate => &UPPER_RIGHT_ANIMATE,
        StateId::LowerLeftAnimate => &LOWER_LEFT_ANIMATE,
        StateId::LowerRightAnimate => &LOWER_RIGHT_ANIMATE,
    }
}
