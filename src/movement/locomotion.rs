//! Movement domain: ground-relative locomotion.
//!
//! Turns the latest move input into a horizontal target velocity and a
//! facing for the visual body. Vertical velocity is never touched here.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::camera::CameraBasis;
use crate::content::{LocomotionTuning, MovementBasis, RotationMode};

/// Floor on the step length used to turn a heading error into an angular
/// velocity.
const MIN_TURN_STEP: f32 = 1.0 / 240.0;

/// Output of one locomotion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    /// Horizontal target velocity (y is always zero).
    pub velocity: Vec3,
    /// Facing the visual body should take this step.
    pub rotation: Quat,
    /// Set in angular-velocity mode instead of rotating directly.
    pub angular_velocity: Option<Vec3>,
}

#[derive(Debug, Clone)]
pub struct Locomotion {
    tuning: LocomotionTuning,
}

/// Forward axis of a facing rotation, flattened onto the ground plane.
pub fn facing_forward(facing: Quat) -> Vec3 {
    let forward = facing * Vec3::NEG_Z;
    Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero()
}

/// Yaw-only rotation whose forward (-Z) points along `direction`.
pub fn look_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}

/// Rotate `from` toward `to` by at most `max_angle` radians.
pub fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_angle || angle <= f32::EPSILON {
        to
    } else {
        from.slerp(to, max_angle / angle)
    }
}

/// Signed angle around +Y taking `from` onto `to` (both horizontal).
pub fn signed_yaw_between(from: Vec3, to: Vec3) -> f32 {
    let angle = f32::atan2(from.cross(to).y, from.dot(to));
    angle.clamp(-PI, PI)
}

impl Locomotion {
    pub fn new(tuning: &LocomotionTuning) -> Self {
        Self {
            tuning: tuning.clone(),
        }
    }

    /// World-space movement direction for `input`, scaled by the input's
    /// magnitude. Camera basis falls back to world axes when no camera is
    /// supplied.
    pub fn move_direction(
        &self,
        input: Vec2,
        facing: Quat,
        camera: Option<&dyn CameraBasis>,
    ) -> Vec3 {
        let world = Vec3::new(input.x, 0.0, -input.y);
        match (self.tuning.basis, camera) {
            (MovementBasis::World, _) | (MovementBasis::Camera, None) => world,
            (MovementBasis::Camera, Some(camera)) => {
                camera.forward_axis() * input.y + camera.right_axis() * input.x
            }
            (MovementBasis::Character, _) => {
                let forward = facing_forward(facing);
                let right = forward.cross(Vec3::Y);
                forward * input.y + right * input.x
            }
        }
    }

    /// One fixed step. `facing` is the visual body's current rotation.
    pub fn tick(
        &self,
        dt: f32,
        input: Vec2,
        facing: Quat,
        camera: Option<&dyn CameraBasis>,
    ) -> LocomotionStep {
        let direction = self.move_direction(input, facing, camera);
        let flat = Vec3::new(direction.x, 0.0, direction.z);

        if flat.length_squared() <= f32::EPSILON {
            // Hold the last heading
            return LocomotionStep {
                velocity: Vec3::ZERO,
                rotation: facing,
                angular_velocity: match self.tuning.rotation_mode {
                    RotationMode::RotateTowards => None,
                    RotationMode::AngularVelocity => Some(Vec3::ZERO),
                },
            };
        }

        let forward = facing_forward(facing);
        let mut speed = self.tuning.move_speed;
        if flat.dot(forward) < 0.0 {
            speed *= self.tuning.backward_speed_ratio;
        }
        let velocity = flat * speed;

        match self.tuning.rotation_mode {
            RotationMode::RotateTowards => {
                let max_angle = self.tuning.rotation_speed.to_radians() * dt;
                LocomotionStep {
                    velocity,
                    rotation: rotate_towards(facing, look_rotation(flat), max_angle),
                    angular_velocity: None,
                }
            }
            RotationMode::AngularVelocity => {
                let error = signed_yaw_between(forward, flat.normalize());
                let max_rate = self.tuning.turn_speed;
                let rate = (error / dt.max(MIN_TURN_STEP)).clamp(-max_rate, max_rate);
                LocomotionStep {
                    velocity,
                    rotation: facing,
                    angular_velocity: Some(Vec3::Y * rate),
                }
            }
        }
    }
}
