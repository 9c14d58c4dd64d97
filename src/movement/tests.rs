//! Movement domain: tests for the ground probe, locomotion and camera basis.

use std::f32::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use bevy::prelude::*;

use super::{
    CameraBasis, FlatBasis, GroundProbe, Locomotion, OrbitCamera, facing_forward, flatten_axis,
    look_rotation, rotate_towards, signed_yaw_between,
};
use crate::content::{GroundProbeTuning, LocomotionTuning, MovementBasis, RotationMode};
use crate::physics::fake::FakePhysics;

const DT: f32 = 1.0 / 50.0;

fn tuning(basis: MovementBasis, rotation_mode: RotationMode) -> LocomotionTuning {
    LocomotionTuning {
        move_speed: 10.0,
        rotation_speed: 360.0,
        turn_speed: 10.0,
        backward_speed_ratio: 0.5,
        basis,
        rotation_mode,
    }
}

fn assert_vec3_eq(a: Vec3, b: Vec3) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
}

// -----------------------------------------------------------------------------
// Ground probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_probe_point_applies_offset() {
    let probe = GroundProbe::new(&GroundProbeTuning::default());
    assert_eq!(
        probe.probe_point(Vec3::new(2.0, 3.0, 4.0)),
        Vec3::new(2.0, 2.0, 4.0)
    );
}

#[test]
fn test_probe_follows_overlap_result() {
    let mut physics = FakePhysics::default();
    let body = physics.spawn_body(Vec3::ZERO);
    let probe = GroundProbe::new(&GroundProbeTuning::default());

    physics.ground_contact = true;
    assert!(probe.is_grounded(&physics, body));

    physics.ground_contact = false;
    assert!(!probe.is_grounded(&physics, body));
}

#[test]
fn test_probe_on_missing_body_is_not_grounded() {
    let mut physics = FakePhysics::default();
    let body = physics.spawn_body(Vec3::ZERO);
    physics.ground_contact = true;
    physics.despawn(body);

    let probe = GroundProbe::new(&GroundProbeTuning::default());
    assert!(!probe.is_grounded(&physics, body));
}

// -----------------------------------------------------------------------------
// Rotation helper tests
// -----------------------------------------------------------------------------

#[test]
fn test_look_rotation_points_forward_along_direction() {
    for direction in [Vec3::NEG_Z, Vec3::Z, Vec3::X, Vec3::new(1.0, 0.0, -1.0).normalize()] {
        assert_vec3_eq(facing_forward(look_rotation(direction)), direction);
    }
}

#[test]
fn test_rotate_towards_is_rate_limited() {
    let from = Quat::IDENTITY;
    let to = Quat::from_rotation_y(FRAC_PI_2);
    let stepped = rotate_towards(from, to, 0.1);
    assert_relative_eq!(from.angle_between(stepped), 0.1, epsilon = 1e-4);
    assert_eq!(rotate_towards(from, to, PI), to);
}

#[test]
fn test_signed_yaw_between() {
    assert_relative_eq!(signed_yaw_between(Vec3::NEG_Z, Vec3::X), -FRAC_PI_2, epsilon = 1e-5);
    assert_relative_eq!(signed_yaw_between(Vec3::NEG_Z, Vec3::NEG_X), FRAC_PI_2, epsilon = 1e-5);
}

// -----------------------------------------------------------------------------
// Locomotion tests
// -----------------------------------------------------------------------------

#[test]
fn test_world_basis_maps_input_to_xz() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::RotateTowards));
    let step = locomotion.tick(DT, Vec2::new(0.0, 1.0), Quat::IDENTITY, None);
    assert_vec3_eq(step.velocity, Vec3::new(0.0, 0.0, -10.0));

    let step = locomotion.tick(DT, Vec2::new(1.0, 0.0), look_rotation(Vec3::X), None);
    assert_vec3_eq(step.velocity, Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn test_zero_input_zeroes_velocity_and_holds_heading() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::RotateTowards));
    let facing = look_rotation(Vec3::X);

    let step = locomotion.tick(DT, Vec2::ZERO, facing, None);
    assert_eq!(step.velocity, Vec3::ZERO);
    assert_eq!(step.rotation, facing);
    assert!(step.angular_velocity.is_none());
}

#[test]
fn test_rotation_is_limited_per_step() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::RotateTowards));
    // Facing -Z, asked to go +X: 90 degrees away, 360 deg/s allows 7.2 per step.
    let step = locomotion.tick(DT, Vec2::new(1.0, 0.0), Quat::IDENTITY, None);
    assert_relative_eq!(
        Quat::IDENTITY.angle_between(step.rotation),
        (360.0_f32 * DT).to_radians(),
        epsilon = 1e-4
    );
}

#[test]
fn test_backward_movement_is_slower() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::RotateTowards));
    // Facing -Z, moving +Z
    let step = locomotion.tick(DT, Vec2::new(0.0, -1.0), Quat::IDENTITY, None);
    assert_relative_eq!(step.velocity.length(), 5.0, epsilon = 1e-4);
}

#[test]
fn test_camera_basis_drives_direction() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::Camera, RotationMode::RotateTowards));
    let camera = FlatBasis {
        forward: Vec3::X,
        right: Vec3::Z,
    };
    let facing = look_rotation(Vec3::X);

    let step = locomotion.tick(DT, Vec2::new(0.0, 1.0), facing, Some(&camera));
    assert_vec3_eq(step.velocity, Vec3::X * 10.0);

    let step = locomotion.tick(DT, Vec2::new(1.0, 0.0), look_rotation(Vec3::Z), Some(&camera));
    assert_vec3_eq(step.velocity, Vec3::Z * 10.0);
}

#[test]
fn test_camera_basis_without_camera_falls_back_to_world() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::Camera, RotationMode::RotateTowards));
    let step = locomotion.tick(DT, Vec2::new(0.0, 1.0), Quat::IDENTITY, None);
    assert_vec3_eq(step.velocity, Vec3::NEG_Z * 10.0);
}

#[test]
fn test_character_basis_follows_facing() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::Character, RotationMode::RotateTowards));
    let facing = look_rotation(Vec3::X);
    let step = locomotion.tick(DT, Vec2::new(0.0, 1.0), facing, None);
    assert_vec3_eq(step.velocity, Vec3::X * 10.0);
}

#[test]
fn test_angular_velocity_mode_turns_toward_target() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::AngularVelocity));
    // Facing -Z, target +X is a clockwise (negative yaw) turn.
    let step = locomotion.tick(DT, Vec2::new(1.0, 0.0), Quat::IDENTITY, None);
    let angular = step.angular_velocity.unwrap();
    assert!(angular.y < 0.0);
    assert_relative_eq!(angular.y, -10.0, epsilon = 1e-4);
    assert_eq!(step.rotation, Quat::IDENTITY);
}

#[test]
fn test_angular_velocity_mode_handles_tiny_steps() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::AngularVelocity));
    let facing = look_rotation(Vec3::new(0.02, 0.0, -1.0).normalize());
    let step = locomotion.tick(1e-7, Vec2::new(0.0, 1.0), facing, None);
    let angular = step.angular_velocity.unwrap();
    assert!(angular.y.is_finite());
    assert!(angular.y.abs() <= 10.0);
}

#[test]
fn test_angular_velocity_mode_stops_turning_without_input() {
    let locomotion = Locomotion::new(&tuning(MovementBasis::World, RotationMode::AngularVelocity));
    let step = locomotion.tick(DT, Vec2::ZERO, Quat::IDENTITY, None);
    assert_eq!(step.angular_velocity, Some(Vec3::ZERO));
}

// -----------------------------------------------------------------------------
// Camera tests
// -----------------------------------------------------------------------------

#[test]
fn test_flatten_axis_drops_vertical() {
    assert_vec3_eq(flatten_axis(Vec3::new(0.0, -5.0, -1.0)), Vec3::NEG_Z);
    assert_eq!(flatten_axis(Vec3::Y), Vec3::ZERO);
}

#[test]
fn test_flat_basis_from_tilted_camera() {
    let transform = Transform::from_xyz(0.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y);
    let basis = FlatBasis::from_transform(&transform);
    assert_vec3_eq(basis.forward_axis(), Vec3::NEG_Z);
    assert_vec3_eq(basis.right_axis(), Vec3::X);
}

#[test]
fn test_orbit_camera_pitch_is_clamped() {
    let mut world = bevy::ecs::world::World::new();
    let mut camera = OrbitCamera::new(world.spawn_empty().id());
    camera.look(Vec2::new(0.0, -100_000.0));
    assert_relative_eq!(camera.pitch, camera.max_pitch);
    camera.look(Vec2::new(0.0, 100_000.0));
    assert_relative_eq!(camera.pitch, camera.min_pitch);
}

#[test]
fn test_orbit_camera_basis_is_horizontal_and_follows_yaw() {
    let mut world = bevy::ecs::world::World::new();
    let mut camera = OrbitCamera::new(world.spawn_empty().id());
    assert_vec3_eq(camera.forward_axis(), Vec3::NEG_Z);
    assert_vec3_eq(camera.right_axis(), Vec3::X);

    camera.yaw = -FRAC_PI_2;
    assert_vec3_eq(camera.forward_axis(), Vec3::X);
    assert_eq!(camera.forward_axis().y, 0.0);
}
