//! Abilities domain: hover (jetpack).

use bevy::prelude::*;

use super::fuel::Fuel;
use super::timer::AbilityTimer;
use crate::content::{FuelTuning, HoverTuning};
use crate::physics::PhysicsService;

#[derive(Debug, Clone)]
pub struct Hover {
    tuning: HoverTuning,
    consumption_rate: f32,
    timer: AbilityTimer,
}

impl Hover {
    pub fn new(tuning: &HoverTuning, fuel: &FuelTuning) -> Self {
        Self {
            tuning: tuning.clone(),
            consumption_rate: fuel.consumption_rate,
            timer: AbilityTimer::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.active
    }

    pub fn timer(&self) -> &AbilityTimer {
        &self.timer
    }

    /// Fuel charged for one full hover window.
    pub fn cost(&self) -> f32 {
        self.consumption_rate * self.tuning.duration
    }

    /// Airborne only, not within `jump_hover_delay` of the last jump, not
    /// already hovering, and with fuel left. The whole window is paid for
    /// here, even if the hover later stops early.
    pub fn try_start(
        &mut self,
        now: f32,
        grounded: bool,
        last_jump_time: Option<f32>,
        fuel: &mut Fuel,
    ) -> bool {
        if grounded {
            return false;
        }
        if last_jump_time.is_some_and(|t| now - t < self.tuning.jump_hover_delay) {
            debug!("Hover rejected: too soon after jump");
            return false;
        }
        if fuel.is_empty() {
            debug!("Hover rejected: out of fuel");
            return false;
        }
        if !self.timer.try_start(now, self.tuning.duration, 0.0) {
            return false;
        }

        fuel.debit(self.cost());
        debug!(
            "Hover started: fuel={:.2}, ends_at={:.3}",
            fuel.current(),
            self.timer.ends_at
        );
        true
    }

    /// Advance one fixed step, pushing upward while the window is open.
    pub fn step(&mut self, now: f32, physics: &mut impl PhysicsService, body: Entity) {
        if self.timer.expire(now) {
            debug!("Hover ended at {:.3}", now);
            return;
        }

        if self.timer.active {
            physics.add_force(body, Vec3::Y * self.tuning.force, self.tuning.force_mode);
        }
    }
}
