//! Movement domain: camera basis used by camera-relative locomotion.
//!
//! The camera owns its yaw/pitch and only ever exposes flattened horizontal
//! axes. Locomotion reads those axes; nothing flows back the other way.

use bevy::prelude::*;

/// Read-only horizontal axes of a camera.
pub trait CameraBasis {
    /// Camera forward with the vertical component removed, normalized.
    fn forward_axis(&self) -> Vec3;
    /// Camera right with the vertical component removed, normalized.
    fn right_axis(&self) -> Vec3;
}

/// Zero the vertical component and normalize. Straight up/down yields zero.
pub fn flatten_axis(axis: Vec3) -> Vec3 {
    Vec3::new(axis.x, 0.0, axis.z).normalize_or_zero()
}

/// Basis captured from an arbitrary camera transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl FlatBasis {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            forward: flatten_axis(*transform.forward()),
            right: flatten_axis(*transform.right()),
        }
    }
}

impl CameraBasis for FlatBasis {
    fn forward_axis(&self) -> Vec3 {
        self.forward
    }

    fn right_axis(&self) -> Vec3 {
        self.right
    }
}

/// Third-person camera orbiting a target entity.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Entity,
    pub yaw: f32,
    pub pitch: f32,
    /// Radians per unit of look delta.
    pub sensitivity: f32,
    pub rotation_speed: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: -0.35,
            sensitivity: 0.002,
            rotation_speed: 1.0,
            min_pitch: -1.2,
            max_pitch: 0.4,
            distance: 8.0,
        }
    }

    /// Apply a 2D look delta (x turns, y tilts). Pitch stays clamped.
    pub fn look(&mut self, delta: Vec2) {
        let scale = self.sensitivity * self.rotation_speed;
        self.yaw -= delta.x * scale;
        self.pitch = (self.pitch - delta.y * scale).clamp(self.min_pitch, self.max_pitch);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera transform looking at `target_position` from the orbit.
    pub fn transform_for(&self, target_position: Vec3) -> Transform {
        let eye = target_position + self.rotation() * Vec3::Z * self.distance;
        Transform::from_translation(eye).looking_at(target_position, Vec3::Y)
    }
}

impl CameraBasis for OrbitCamera {
    fn forward_axis(&self) -> Vec3 {
        flatten_axis(Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z)
    }

    fn right_axis(&self) -> Vec3 {
        flatten_axis(Quat::from_rotation_y(self.yaw) * Vec3::X)
    }
}
