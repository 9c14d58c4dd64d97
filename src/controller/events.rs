//! Controller domain: commands delivered by the input collaborator.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A performed input action. Only the performed transition is ever sent;
/// movement additionally sends [`ControllerCommand::MoveCancelled`] when the
/// stick or keys return to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerCommand {
    Move(Vec2),
    MoveCancelled,
    Jump,
    Dash,
    Grab,
    Release,
    Drop,
    Shake,
}

impl Message for ControllerCommand {}
