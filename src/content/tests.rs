//! Content domain: tests for tuning parsing and validation.

use approx::assert_relative_eq;
use bevy::prelude::Vec3;

use super::{
    ConfigError, ControllerTuning, DashKind, FuelRegen, MovementBasis, parse_tuning,
    validate_tuning,
};

#[test]
fn test_defaults_are_valid() {
    assert!(validate_tuning(&ControllerTuning::default()).is_ok());
}

#[test]
fn test_default_values() {
    let tuning = ControllerTuning::default();
    assert_relative_eq!(tuning.locomotion.move_speed, 10.0);
    assert_relative_eq!(tuning.locomotion.rotation_speed, 360.0);
    assert_relative_eq!(tuning.dash.ground_speed, 20.0);
    assert_relative_eq!(tuning.dash.air_speed, 15.0);
    assert_relative_eq!(tuning.dash.duration, 0.2);
    assert_relative_eq!(tuning.dash.cooldown, 0.5);
    assert_relative_eq!(tuning.jump.force, 10.0);
    assert_relative_eq!(tuning.grab.grab_distance, 2.0);
    assert_relative_eq!(tuning.grab.throw_force, 10.0);
    assert_eq!(tuning.ground_probe.offset, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let ron = r#"(
        locomotion: (move_speed: 6.5, basis: Camera),
        dash: (kind: Impulse(force: 12.0), max_vertical_velocity: 4.0),
        fuel: (regen: GroundedOnly),
        ground_probe: (offset: (0.0, -0.9, 0.0)),
    )"#;

    let tuning = parse_tuning(ron, "inline").unwrap();
    assert_relative_eq!(tuning.locomotion.move_speed, 6.5);
    assert_eq!(tuning.locomotion.basis, MovementBasis::Camera);
    assert_eq!(tuning.dash.kind, DashKind::Impulse { force: 12.0 });
    assert_eq!(tuning.dash.max_vertical_velocity, Some(4.0));
    assert_eq!(tuning.fuel.regen, FuelRegen::GroundedOnly);
    assert_eq!(tuning.ground_probe.offset, Vec3::new(0.0, -0.9, 0.0));
    // Untouched sections fall back to defaults
    assert_relative_eq!(tuning.jump.force, 10.0);
    assert_relative_eq!(tuning.dash.air_speed, 15.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(locomotion: (move_speed: ", "broken.ron").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref file, .. } if file == "broken.ron"));
}

#[test]
fn test_backward_ratio_out_of_range_is_rejected() {
    let err = parse_tuning("(locomotion: (backward_speed_ratio: 1.5))", "inline").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "locomotion.backward_speed_ratio",
            ..
        }
    ));
}

#[test]
fn test_zero_dash_duration_is_rejected() {
    let mut tuning = ControllerTuning::default();
    tuning.dash.duration = 0.0;
    assert!(matches!(
        validate_tuning(&tuning),
        Err(ConfigError::Invalid {
            field: "dash.duration",
            ..
        })
    ));
}

#[test]
fn test_negative_fuel_rate_is_rejected() {
    let mut tuning = ControllerTuning::default();
    tuning.fuel.regeneration_rate = -1.0;
    assert!(validate_tuning(&tuning).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = super::load_tuning(std::path::Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_shipped_tuning_file_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DEFAULT_TUNING_PATH);
    let tuning = super::load_tuning(&path).unwrap();
    assert_eq!(tuning.locomotion.basis, MovementBasis::Camera);
    assert_eq!(tuning.dash.max_vertical_velocity, Some(4.0));
}
