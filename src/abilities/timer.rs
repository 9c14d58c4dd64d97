//! Abilities domain: reusable timed slot shared by duration abilities.

/// Plain timed state for one ability kind.
///
/// A slot is reset, never destroyed, when its window ends. A start request
/// while active or before `cooldown_until` is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityTimer {
    pub active: bool,
    pub started_at: f32,
    pub ends_at: f32,
    pub cooldown_until: f32,
}

impl Default for AbilityTimer {
    fn default() -> Self {
        Self {
            active: false,
            started_at: 0.0,
            ends_at: 0.0,
            cooldown_until: f32::NEG_INFINITY,
        }
    }
}

impl AbilityTimer {
    pub fn can_start(&self, now: f32) -> bool {
        !self.active && now >= self.cooldown_until
    }

    /// Opens a window of `duration` and a cooldown of `cooldown`, both from
    /// `now`. Returns false without touching state when the guard rejects.
    pub fn try_start(&mut self, now: f32, duration: f32, cooldown: f32) -> bool {
        if !self.can_start(now) {
            return false;
        }

        self.active = true;
        self.started_at = now;
        self.ends_at = now + duration;
        self.cooldown_until = now + cooldown;
        true
    }

    /// Closes the window once `now` reaches its end. Returns true only on the
    /// step that closes it.
    pub fn expire(&mut self, now: f32) -> bool {
        if self.active && now >= self.ends_at {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self, now: f32) -> f32 {
        if self.active {
            (self.ends_at - now).max(0.0)
        } else {
            0.0
        }
    }
}
