//! Abilities domain: jump.

use bevy::prelude::*;

use crate::content::JumpTuning;
use crate::physics::PhysicsService;

#[derive(Debug, Clone)]
pub struct Jump {
    force: f32,
    last_jump_time: Option<f32>,
}

impl Jump {
    pub fn new(tuning: &JumpTuning) -> Self {
        Self {
            force: tuning.force,
            last_jump_time: None,
        }
    }

    pub fn last_jump_time(&self) -> Option<f32> {
        self.last_jump_time
    }

    /// Grounded only. Replaces the vertical velocity with the jump force.
    pub fn try_start(
        &mut self,
        now: f32,
        grounded: bool,
        physics: &mut impl PhysicsService,
        body: Entity,
    ) -> bool {
        if !grounded {
            return false;
        }

        let mut velocity = physics.velocity(body);
        velocity.y = self.force;
        physics.set_velocity(body, velocity);
        self.last_jump_time = Some(now);

        debug!("Jump at {:.3}: vy={}", now, self.force);
        true
    }
}
