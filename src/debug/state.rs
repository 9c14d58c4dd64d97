//! Debug overlay state.

use bevy::prelude::*;

/// Resource tracking which debug visuals are drawn
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Ground probe sphere, green when grounded and red when airborne
    pub show_probe: bool,
    /// Fuel gauge above the player
    pub show_fuel: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_probe: true,
            show_fuel: true,
        }
    }
}

impl DebugState {
    pub fn any_visible(&self) -> bool {
        self.show_probe || self.show_fuel
    }
}
