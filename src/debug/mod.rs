//! Debug overlay: grounded and fuel feedback drawn with gizmos.
//!
//! Reads [`ControllerStatus`](crate::controller::ControllerStatus) only; it
//! never feeds back into the controller.

mod state;
mod systems;

use bevy::prelude::*;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::handle_debug_hotkeys,
                (systems::draw_ground_probe, systems::draw_fuel_gauge),
            )
                .chain(),
        );
    }
}
