//! Config domain: tests for tuning parsing and validation.

use std::path::Path;

use bevy::prelude::*;

use super::{
    MovementTuning, MovementTuningDef, WallSlideVariant, load_tuning, load_tuning_or_default,
    parse_tuning, validate_tuning,
};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_tuning() {
    let ron = r#"(
        movement_speed: 7.0,
        max_slope_angle: 55.0,
        max_aerial_jumps: 2,
        max_jump_force: 15.0,
        min_jump_force: 5.0,
        wall_slide_speed_max: 3.0,
        wall_stick_time: 0.2,
        wall_jump_climb: (7.5, 16.0),
        wall_jump_off: (8.5, 7.0),
        wall_leap: (18.0, 17.0),
        wall_fall: (3.0, -4.0),
        dash_force: 25.0,
        dash_duration: 0.1,
        dash_cooldown: 0.75,
        wall_slide_variant: Fixed,
    )"#;

    let tuning = parse_tuning(ron, "inline").expect("valid tuning");

    assert_eq!(tuning.movement_speed, 7.0);
    assert_eq!(tuning.max_slope_angle, 55.0);
    assert_eq!(tuning.max_aerial_jumps, 2);
    assert_eq!(tuning.wall_fall, Vec2::new(3.0, -4.0));
    assert_eq!(tuning.wall_slide_variant, WallSlideVariant::Fixed);
    assert!(tuning.scan_settings().walls_refresh_air_jumps);
}

#[test]
fn test_parse_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(max_aerial_jumps: 3)", "inline").expect("valid tuning");
    let defaults = MovementTuning::default();

    assert_eq!(tuning.max_aerial_jumps, 3);
    assert_eq!(tuning.max_slope_angle, defaults.max_slope_angle);
    assert_eq!(tuning.wall_leap, defaults.wall_leap);
    assert_eq!(tuning.wall_slide_variant, WallSlideVariant::Clamp);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(max_aerial_jumps: \"two\")", "movement.ron").unwrap_err();

    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load movement.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist/movement.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let tuning = load_tuning_or_default(Path::new("does/not/exist"));
    assert_eq!(tuning, MovementTuning::default());
}

#[test]
fn test_shipped_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
    let tuning = load_tuning(&path).expect("shipped tuning parses");

    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_def_conversion_preserves_values() {
    let tuning = MovementTuning {
        wall_leap: Vec2::new(1.0, 2.0),
        max_aerial_jumps: 4,
        ..default()
    };

    let restored = MovementTuning::from(MovementTuningDef::from(&tuning));
    assert_eq!(restored, tuning);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_validation_reports_bad_fields() {
    let tuning = MovementTuning {
        max_slope_angle: 120.0,
        wall_stick_time: -1.0,
        dash_force: f32::NAN,
        min_jump_force: 50.0,
        wall_fall: Vec2::new(f32::INFINITY, 0.0),
        ..default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 5);
    assert!(fields.contains(&"max_slope_angle"));
    assert!(fields.contains(&"wall_stick_time"));
    assert!(fields.contains(&"dash_force"));
    assert!(fields.contains(&"min_jump_force"));
    assert!(fields.contains(&"wall_fall"));

    let nan = errors.iter().find(|e| e.field == "dash_force").unwrap();
    assert_eq!(nan.reason, "is not finite");
}
