//! Controller domain: one controller per actor, driven by input commands, a
//! fixed physics step and the frame clock.

mod components;
mod events;
mod systems;

use bevy::prelude::*;

pub use components::{ControllerClock, ControllerStatus, PlayerController};
pub use events::ControllerCommand;

/// Ordering for the controller's fixed-step work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Commands,
    Tick,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControllerCommand>()
            .configure_sets(
                FixedUpdate,
                (ControllerSet::Commands, ControllerSet::Tick).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::dispatch_commands.in_set(ControllerSet::Commands),
                    systems::fixed_tick.in_set(ControllerSet::Tick),
                ),
            )
            .add_systems(Update, (systems::read_input, systems::frame_tick));
    }
}
