//! Movement domain: marker components for the controlled actor.

use bevy::prelude::*;

/// Root rigid body of the controlled character.
#[derive(Component, Debug)]
pub struct Player;

/// Visual body that turns toward the movement direction and carries held
/// objects.
#[derive(Component, Debug)]
pub struct PlayerModel;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
