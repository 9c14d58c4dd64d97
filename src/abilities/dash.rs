//! Abilities domain: dash.

use bevy::prelude::*;

use super::timer::AbilityTimer;
use crate::content::{DashKind, DashTuning};
use crate::physics::{ForceMode, PhysicsService};

/// Dash slot. Speed and velocity are locked in when the dash starts; the
/// grounded state is not re-sampled mid-dash.
#[derive(Debug, Clone)]
pub struct Dash {
    tuning: DashTuning,
    timer: AbilityTimer,
    velocity: Vec3,
}

impl Dash {
    pub fn new(tuning: &DashTuning) -> Self {
        Self {
            tuning: tuning.clone(),
            timer: AbilityTimer::default(),
            velocity: Vec3::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.active
    }

    pub fn timer(&self) -> &AbilityTimer {
        &self.timer
    }

    /// Velocity the dash holds (sustained) or imparted (impulse).
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Upward component carried into the dash: the current vertical velocity
    /// capped at `max_vertical_velocity`, never negative.
    fn vertical_component(&self, current_vertical: f32) -> f32 {
        match self.tuning.max_vertical_velocity {
            Some(cap) => current_vertical.min(cap).max(0.0),
            None => 0.0,
        }
    }

    /// Attempt a dash along the horizontal `direction`.
    pub fn try_start(
        &mut self,
        now: f32,
        direction: Vec3,
        grounded: bool,
        physics: &mut impl PhysicsService,
        body: Entity,
    ) -> bool {
        if !self
            .timer
            .try_start(now, self.tuning.duration, self.tuning.cooldown)
        {
            debug!(
                "Dash rejected: active={}, cooldown_until={:.3}, now={:.3}",
                self.timer.active, self.timer.cooldown_until, now
            );
            return false;
        }

        let horizontal = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        let vertical = self.vertical_component(physics.velocity(body).y);

        match self.tuning.kind {
            DashKind::Impulse { force } => {
                self.velocity = horizontal * force + Vec3::Y * vertical;
                physics.add_force(body, self.velocity, ForceMode::VelocityChange);
            }
            DashKind::Sustained => {
                let speed = if grounded {
                    self.tuning.ground_speed
                } else {
                    self.tuning.air_speed
                };
                self.velocity = horizontal * speed + Vec3::Y * vertical;
                physics.set_velocity(body, self.velocity);
            }
        }

        debug!(
            "Dash started: grounded={}, velocity={:?}, ends_at={:.3}",
            grounded, self.velocity, self.timer.ends_at
        );
        true
    }

    /// Advance one fixed step. Expiry leaves whatever velocity the body has.
    pub fn step(&mut self, now: f32, physics: &mut impl PhysicsService, body: Entity) {
        if self.timer.expire(now) {
            debug!("Dash ended at {:.3}", now);
            return;
        }

        if self.timer.active && self.tuning.kind == DashKind::Sustained {
            physics.set_velocity(body, self.velocity);
        }
    }
}
