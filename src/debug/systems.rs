//! Debug overlay systems.

use bevy::prelude::*;

use super::state::DebugState;
use crate::controller::{ControllerStatus, PlayerController};

const FUEL_BAR_WIDTH: f32 = 1.2;
const FUEL_BAR_HEIGHT: f32 = 1.6;

/// Grounded tint for the probe gizmo.
pub(crate) fn grounded_color(grounded: bool) -> Color {
    if grounded {
        Color::srgb(0.1, 0.9, 0.2)
    } else {
        Color::srgb(0.9, 0.15, 0.1)
    }
}

/// F1 toggles everything, F2 the probe, F3 the fuel gauge.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        let visible = !debug_state.any_visible();
        debug_state.show_probe = visible;
        debug_state.show_fuel = visible;
        info!("[DEBUG] Overlay {}", if visible { "on" } else { "off" });
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_probe = !debug_state.show_probe;
    }
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_fuel = !debug_state.show_fuel;
    }
}

pub(crate) fn draw_ground_probe(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    players: Query<(&PlayerController, &ControllerStatus, &GlobalTransform)>,
) {
    if !debug_state.show_probe {
        return;
    }
    for (controller, status, transform) in &players {
        let probe = controller.probe();
        let point = probe.probe_point(transform.translation());
        gizmos.sphere(
            Isometry3d::from_translation(point),
            probe.radius(),
            grounded_color(status.grounded),
        );
    }
}

pub(crate) fn draw_fuel_gauge(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    players: Query<(&ControllerStatus, &GlobalTransform)>,
) {
    if !debug_state.show_fuel {
        return;
    }
    for (status, transform) in &players {
        let start = transform.translation() + Vec3::new(-FUEL_BAR_WIDTH * 0.5, FUEL_BAR_HEIGHT, 0.0);
        let full = start + Vec3::X * FUEL_BAR_WIDTH;
        let filled = start + Vec3::X * FUEL_BAR_WIDTH * status.fuel_fraction.clamp(0.0, 1.0);
        let color = if status.hovering {
            Color::srgb(1.0, 0.6, 0.1)
        } else {
            Color::srgb(0.2, 0.6, 1.0)
        };
        gizmos.line(start, full, Color::srgb(0.3, 0.3, 0.3));
        gizmos.line(start, filled, color);
    }
}
