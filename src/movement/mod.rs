//! Movement domain: ground probe, locomotion and the camera basis it reads.

mod bootstrap;
mod camera;
mod components;
mod locomotion;
mod probe;

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

pub use bootstrap::{spawn_actor, spawn_grabbable, spawn_ledge, spawn_player};
pub use camera::{CameraBasis, FlatBasis, OrbitCamera, flatten_axis};
pub use components::{Ground, Player, PlayerModel};
pub use locomotion::{
    Locomotion, LocomotionStep, facing_forward, look_rotation, rotate_towards, signed_yaw_between,
};
pub use probe::GroundProbe;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (apply_look_input, follow_target).chain());
    }
}

/// Feed mouse motion to every orbit camera as a look delta.
fn apply_look_input(motion: Res<AccumulatedMouseMotion>, mut cameras: Query<&mut OrbitCamera>) {
    if motion.delta == Vec2::ZERO {
        return;
    }
    for mut camera in &mut cameras {
        camera.look(motion.delta);
    }
}

fn follow_target(
    mut cameras: Query<(&OrbitCamera, &mut Transform)>,
    targets: Query<&GlobalTransform, Without<OrbitCamera>>,
) {
    for (camera, mut transform) in &mut cameras {
        let Ok(target) = targets.get(camera.target) else {
            continue;
        };
        *transform = camera.transform_for(target.translation());
    }
}

#[cfg(test)]
mod tests;
