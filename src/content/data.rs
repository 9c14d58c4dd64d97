//! Content domain: controller tuning data.
//!
//! Every tunable the controller reads lives here. The values are supplied
//! once when a controller is built and never change for that actor.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::ForceMode;

#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuning {
    pub locomotion: LocomotionTuning,
    pub dash: DashTuning,
    pub jump: JumpTuning,
    pub hover: HoverTuning,
    pub fuel: FuelTuning,
    pub grab: GrabTuning,
    pub shake: ShakeTuning,
    pub ground_probe: GroundProbeTuning,
}

/// Where the horizontal movement basis comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum MovementBasis {
    /// Input axes map straight onto world X/Z.
    #[default]
    World,
    /// Input forward follows the current facing.
    Character,
    /// Input follows the camera's flattened forward/right axes.
    Camera,
}

/// How the visual body turns toward the movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum RotationMode {
    /// Rotate at most `rotation_speed` degrees per step.
    #[default]
    RotateTowards,
    /// Drive angular velocity from the signed heading error.
    AngularVelocity,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub move_speed: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    /// Yaw rate cap in radians per second for angular-velocity mode.
    pub turn_speed: f32,
    /// Speed multiplier when moving against the facing direction, in (0, 1].
    pub backward_speed_ratio: f32,
    pub basis: MovementBasis,
    pub rotation_mode: RotationMode,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            rotation_speed: 360.0,
            turn_speed: 10.0,
            backward_speed_ratio: 0.5,
            basis: MovementBasis::World,
            rotation_mode: RotationMode::RotateTowards,
        }
    }
}

/// How a dash moves the body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub enum DashKind {
    /// One velocity-change impulse of `direction * force` at start.
    Impulse { force: f32 },
    /// Velocity overwritten to `direction * speed` every step until the end.
    #[default]
    Sustained,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashTuning {
    pub kind: DashKind,
    pub ground_speed: f32,
    pub air_speed: f32,
    pub duration: f32,
    pub cooldown: f32,
    /// Cap on the upward component carried into a dash. `None` keeps dashes
    /// flat.
    pub max_vertical_velocity: Option<f32>,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            kind: DashKind::Sustained,
            ground_speed: 20.0,
            air_speed: 15.0,
            duration: 0.2,
            cooldown: 0.5,
            max_vertical_velocity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Vertical velocity set on takeoff.
    pub force: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self { force: 10.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HoverTuning {
    /// Upward acceleration applied each step while hovering.
    pub force: f32,
    pub duration: f32,
    /// Minimum time after a jump before hover may start.
    pub jump_hover_delay: f32,
    pub force_mode: ForceMode,
}

impl Default for HoverTuning {
    fn default() -> Self {
        Self {
            force: 25.0,
            duration: 0.1,
            jump_hover_delay: 0.2,
            force_mode: ForceMode::Acceleration,
        }
    }
}

/// When fuel is allowed to refill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FuelRegen {
    /// Whenever the actor is not hovering.
    #[default]
    Always,
    /// Only while the actor stands on the ground.
    GroundedOnly,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FuelTuning {
    pub max_fuel: f32,
    /// Fuel per second of planned hover time.
    pub consumption_rate: f32,
    /// Fuel per real second.
    pub regeneration_rate: f32,
    pub regen: FuelRegen,
}

impl Default for FuelTuning {
    fn default() -> Self {
        Self {
            max_fuel: 3.0,
            consumption_rate: 1.0,
            regeneration_rate: 0.5,
            regen: FuelRegen::Always,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GrabTuning {
    pub grab_distance: f32,
    /// Speed imparted along the facing direction on release.
    pub throw_force: f32,
}

impl Default for GrabTuning {
    fn default() -> Self {
        Self {
            grab_distance: 2.0,
            throw_force: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShakeTuning {
    pub duration: f32,
    /// Roll offset in degrees.
    pub angle: f32,
    /// Real-time seconds between sign flips.
    pub flip_interval: f32,
}

impl Default for ShakeTuning {
    fn default() -> Self {
        Self {
            duration: 1.0,
            angle: 15.0,
            flip_interval: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundProbeTuning {
    /// Probe centre relative to the actor position.
    pub offset: Vec3,
    pub radius: f32,
}

impl Default for GroundProbeTuning {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, -1.0, 0.0),
            radius: 0.2,
        }
    }
}
