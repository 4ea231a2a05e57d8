//! Unit tests for region animation.

use hoverboard::region::Region;
use hoverboard::render::{DisplayList, DrawCommand};
use hoverboard::types::{RegionBounds, RegionId, Rgb};

fn lower_left(step: f32) -> Region {
    Region::new(
        RegionId::LowerLeft,
        RegionBounds::new(0.0, 400.0, 200.0, 400.0),
        Rgb::from_u8(200, 0, 0),
        Rgb::from_u8(0, 200, 0),
        step,
    )
}

#[test]
fn test_update_converges_and_stays() {
    let mut region = lower_left(7.0);

    let mut ticks = 0;
    while !region.is_settled() {
        region.update();
        ticks += 1;
        assert!(ticks <= 100, "animation did not converge");

        let color = region.current_color();
        assert!((0.0..=200.0).contains(&color.r));
        assert!((0.0..=200.0).contains(&color.g));
    }

    // 200 / 7 rounds up to 29 steps.
    assert_eq!(ticks, 29);

    for _ in 0..5 {
        region.update();
        assert_eq!(region.current_color(), region.active_color());
    }
}

#[test]
fn test_reset_after_partial_animation() {
    let mut region = lower_left(5.0);
    for _ in 0..3 {
        region.update();
    }
    assert_eq!(region.current_color(), Rgb::new(185.0, 15.0, 0.0));

    region.reset_color();
    assert_eq!(region.current_color(), region.idle_color());
}

#[test]
fn test_reset_after_settling() {
    let mut region = lower_left(50.0);
    for _ in 0..10 {
        region.update();
    }
    assert!(region.is_settled());

    region.reset_color();
    assert_eq!(region.current_color(), Rgb::from_u8(200, 0, 0));
}

#[test]
fn test_draw_without_update_uses_idle_color() {
    let region = lower_left(5.0);
    let mut list = DisplayList::new();
    region.draw(&mut list);

    match list.commands() {
        [DrawCommand::FillRect { color, .. }] => assert_eq!(*color, region.idle_color()),
        other => panic!("unexpected commands: {:?}", other),
    }
}
