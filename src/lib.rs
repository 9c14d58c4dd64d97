//! Locomotion and ability controller for a third-person action character.
//!
//! Discrete input commands drive continuous rigid-body motion: ground-relative
//! movement plus dash, jump, fuel-limited hover and grab/throw/shake of
//! nearby bodies. The controller core is plain state behind the
//! [`physics::PhysicsService`] and [`movement::CameraBasis`] traits; the
//! plugins here wire it to Bevy and avian3d.

pub mod abilities;
pub mod content;
pub mod controller;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod interaction;
pub mod movement;
pub mod physics;

use bevy::prelude::*;

/// Everything the controller needs except the tuning, which
/// [`content::ContentPlugin`] provides.
pub struct CharacterControllerPlugins;

impl Plugin for CharacterControllerPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            physics::PhysicsPlugin,
            movement::MovementPlugin,
            controller::ControllerPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
