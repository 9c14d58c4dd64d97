//! Validation for controller tuning values.

use super::data::{ControllerTuning, DashKind};
use super::loader::ConfigError;

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

/// Check that every tunable is in a range the controller can run with.
pub fn validate_tuning(tuning: &ControllerTuning) -> Result<(), ConfigError> {
    let loco = &tuning.locomotion;
    non_negative("locomotion.move_speed", loco.move_speed)?;
    positive("locomotion.rotation_speed", loco.rotation_speed)?;
    non_negative("locomotion.turn_speed", loco.turn_speed)?;
    if !(loco.backward_speed_ratio > 0.0 && loco.backward_speed_ratio <= 1.0) {
        return Err(ConfigError::Invalid {
            field: "locomotion.backward_speed_ratio",
            reason: format!("must be in (0, 1], got {}", loco.backward_speed_ratio),
        });
    }

    let dash = &tuning.dash;
    positive("dash.duration", dash.duration)?;
    non_negative("dash.cooldown", dash.cooldown)?;
    non_negative("dash.ground_speed", dash.ground_speed)?;
    non_negative("dash.air_speed", dash.air_speed)?;
    if let DashKind::Impulse { force } = dash.kind {
        non_negative("dash.kind.force", force)?;
    }
    if let Some(cap) = dash.max_vertical_velocity {
        non_negative("dash.max_vertical_velocity", cap)?;
    }

    non_negative("jump.force", tuning.jump.force)?;

    let hover = &tuning.hover;
    positive("hover.duration", hover.duration)?;
    non_negative("hover.force", hover.force)?;
    non_negative("hover.jump_hover_delay", hover.jump_hover_delay)?;

    let fuel = &tuning.fuel;
    non_negative("fuel.max_fuel", fuel.max_fuel)?;
    non_negative("fuel.consumption_rate", fuel.consumption_rate)?;
    non_negative("fuel.regeneration_rate", fuel.regeneration_rate)?;

    positive("grab.grab_distance", tuning.grab.grab_distance)?;
    non_negative("grab.throw_force", tuning.grab.throw_force)?;

    non_negative("shake.duration", tuning.shake.duration)?;
    positive("shake.flip_interval", tuning.shake.flip_interval)?;

    positive("ground_probe.radius", tuning.ground_probe.radius)?;

    Ok(())
}
