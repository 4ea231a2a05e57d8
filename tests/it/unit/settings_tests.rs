//! Unit tests for settings loading.

use hoverboard::app::HoverApp;
use hoverboard::settings::{Settings, SettingsError};
use hoverboard::types::{RegionId, Rgb};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{
            "canvas_width": 1024,
            "canvas_height": 512,
            "animation_step": 10.0,
            "background": "#202020",
            "regions": {{
                "lower_right": {{ "idle": "#0000ff", "active": "#ffff00" }}
            }}
        }}"##
    )
    .unwrap();

    let settings = Settings::load_from(file.path()).unwrap();

    assert_eq!(settings.canvas_size(), (1024.0, 512.0));
    assert_eq!(settings.background, Rgb::from_u8(32, 32, 32));
    assert_eq!(settings.regions.colors_for(RegionId::LowerRight).idle, Rgb::from_u8(0, 0, 255));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::load_from(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_malformed_json_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let result = Settings::load_from(file.path());
    assert!(matches!(result, Err(SettingsError::Json(_))));
}

#[test]
fn test_loaded_file_is_validated() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "animation_step": -2.0 }}"#).unwrap();

    let result = Settings::load_from(file.path());
    assert!(matches!(result, Err(SettingsError::InvalidAnimationStep(step)) if step == -2.0));
}

#[test]
fn test_settings_drive_the_scene() {
    let settings = Settings::from_json(r#"{ "canvas_width": 200, "canvas_height": 100, "animation_step": 100.0 }"#).unwrap();
    let mut app = HoverApp::new(&settings);

    let mut list = hoverboard::render::DisplayList::new();
    app.tick((150.0, 75.0), &mut list).unwrap();

    assert_eq!(app.scene().hovered(), RegionId::LowerRight);
    assert_eq!(app.scene().canvas_size(), (200.0, 100.0));
    // (0,200,0) -> (200,0,0) at 100 per tick.
    assert_eq!(
        app.scene().region(RegionId::LowerRight).current_color(),
        Rgb::new(100.0, 100.0, 0.0)
    );
}

#[test]
fn test_round_trip_preserves_palette() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"#c80000\""));

    let restored = Settings::from_json(&json).unwrap();
    assert_eq!(restored, Settings::default());
}
