//! Abilities domain: hover fuel.

use crate::content::{FuelRegen, FuelTuning};

/// Bounded resource in `[0, max_fuel]`.
///
/// Hover pays for its whole planned window up front through [`Fuel::debit`];
/// [`Fuel::regenerate`] credits it back on the frame clock while not
/// hovering.
#[derive(Debug, Clone)]
pub struct Fuel {
    current: f32,
    max: f32,
    regeneration_rate: f32,
    regen: FuelRegen,
}

impl Fuel {
    /// Starts with a full tank.
    pub fn new(tuning: &FuelTuning) -> Self {
        let max = tuning.max_fuel.max(0.0);
        Self {
            current: max,
            max,
            regeneration_rate: tuning.regeneration_rate,
            regen: tuning.regen,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// One-time charge. Floors at zero.
    pub fn debit(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Per-frame credit of `regeneration_rate * dt`, skipped while hovering
    /// (and while airborne under [`FuelRegen::GroundedOnly`]).
    pub fn regenerate(&mut self, dt: f32, hovering: bool, grounded: bool) {
        if hovering || (self.regen == FuelRegen::GroundedOnly && !grounded) {
            return;
        }
        if self.current < self.max {
            self.current = (self.current + self.regeneration_rate * dt).clamp(0.0, self.max);
        }
    }
}
