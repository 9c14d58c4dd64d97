//! Interaction domain: cosmetic shake of a held object.

use bevy::prelude::*;

use crate::content::ShakeTuning;

/// Roll oscillation of `±angle` around the held object's rest rotation,
/// flipping sign every `flip_interval` of real time. Sets rotation directly;
/// no torque is involved.
#[derive(Debug, Clone)]
pub struct Shake {
    tuning: ShakeTuning,
    active: bool,
    ends_at: f32,
    next_flip_at: f32,
    direction: f32,
    rest: Quat,
}

impl Shake {
    pub fn new(tuning: &ShakeTuning) -> Self {
        Self {
            tuning: tuning.clone(),
            active: false,
            ends_at: 0.0,
            next_flip_at: 0.0,
            direction: 1.0,
            rest: Quat::IDENTITY,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `rest` is the held object's local rotation before shaking.
    pub fn try_start(&mut self, now: f32, rest: Quat) -> bool {
        if self.active {
            return false;
        }

        self.active = true;
        self.ends_at = now + self.tuning.duration;
        self.next_flip_at = now;
        self.direction = 1.0;
        self.rest = rest;
        true
    }

    /// Stop without producing a rotation (the object is gone or released).
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advance on the frame clock. Returns the local rotation to apply, if it
    /// changed. The final call restores the rest rotation.
    pub fn advance(&mut self, now: f32) -> Option<Quat> {
        if !self.active {
            return None;
        }

        if now >= self.ends_at {
            self.active = false;
            return Some(self.rest);
        }

        if now < self.next_flip_at {
            return None;
        }

        let mut offset = self.direction;
        while self.next_flip_at <= now {
            offset = self.direction;
            self.direction = -self.direction;
            self.next_flip_at += self.tuning.flip_interval;
        }

        let roll = self.tuning.angle.to_radians() * offset;
        Some(self.rest * Quat::from_rotation_z(roll))
    }
}
