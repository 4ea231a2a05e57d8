//! Transition Tests
//!
//! Exercises `change_state` and `revert_to_previous_state` through the
//! application and checks the enter/exit announcements they produce.

use crate::helpers::{current_color, default_app, hold_at, journal_lines, tick_at};
use hoverboard::state::{StateEvent, StateId, StateMachineError};
use hoverboard::types::{RegionId, Rgb};

#[test]
fn test_change_state_fires_one_exit_and_one_enter() {
    let mut app = default_app();

    app.change_state(StateId::LowerLeftAnimate).unwrap();

    assert!(app.is_in_state(StateId::LowerLeftAnimate));
    assert_eq!(
        app.scene().journal().iter().copied().collect::<Vec<_>>(),
        vec![
            StateEvent::Exited(StateId::UpperLeftAnimate),
            StateEvent::Entered(StateId::LowerLeftAnimate),
        ]
    );
}

#[test]
fn test_exit_happens_before_enter() {
    let mut app = default_app();
    app.change_state(StateId::UpperRightAnimate).unwrap();
    app.change_state(StateId::LowerRightAnimate).unwrap();

    insta::assert_json_snapshot!(journal_lines(&app), @r###"
    [
      "exiting state UpperLeftAnimateState",
      "entering state UpperRightAnimateState",
      "exiting state UpperRightAnimateState",
      "entering state LowerRightAnimateState"
    ]
    "###);
}

#[test]
fn test_revert_restores_previous_state() {
    let mut app = default_app();
    app.change_state(StateId::UpperRightAnimate).unwrap();
    app.change_state(StateId::LowerLeftAnimate).unwrap();

    app.revert_to_previous_state().unwrap();

    assert!(app.is_in_state(StateId::UpperRightAnimate));
    assert_eq!(app.machine().previous_state(), Some(StateId::LowerLeftAnimate));
}

#[test]
fn test_revert_twice_toggles() {
    let mut app = default_app();
    app.change_state(StateId::LowerRightAnimate).unwrap();

    app.revert_to_previous_state().unwrap();
    assert!(app.is_in_state(StateId::UpperLeftAnimate));

    app.revert_to_previous_state().unwrap();
    assert!(app.is_in_state(StateId::LowerRightAnimate));
}

#[test]
fn test_revert_before_any_transition_fails() {
    let mut app = default_app();

    let result = app.revert_to_previous_state();

    assert_eq!(result, Err(StateMachineError::NoPreviousState));
    assert!(app.is_in_state(StateId::UpperLeftAnimate));
    assert!(journal_lines(&app).is_empty());
}

#[test]
fn test_exit_resets_only_its_own_region() {
    let mut app = default_app();
    hold_at(&mut app, 10.0, 10.0, 10);
    assert_eq!(current_color(&app, RegionId::UpperLeft), Rgb::new(50.0, 50.0, 50.0));

    app.change_state(StateId::LowerLeftAnimate).unwrap();

    assert_eq!(current_color(&app, RegionId::UpperLeft), Rgb::BLACK);
    assert_eq!(current_color(&app, RegionId::LowerLeft), Rgb::from_u8(200, 0, 0));
}

#[test]
fn test_is_in_state_compares_variants() {
    let app = default_app();
    assert!(app.is_in_state(StateId::UpperLeftAnimate));
    assert!(!app.is_in_state(StateId::UpperRightAnimate));
    assert!(!app.is_in_state(StateId::Global));
    assert_eq!(app.machine().global_state(), Some(StateId::Global));
}

#[test]
fn test_global_state_is_never_announced() {
    let mut app = default_app();
    for (x, y) in [(790.0, 10.0), (10.0, 390.0), (790.0, 390.0)] {
        tick_at(&mut app, x, y);
    }

    assert!(
        journal_lines(&app)
            .iter()
            .all(|line| !line.contains(StateId::Global.name()))
    );
}
