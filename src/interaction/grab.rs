//! Interaction domain: grab, hold, throw and drop.

use avian3d::prelude::{LayerMask, PhysicsLayer};
use bevy::prelude::*;

use super::shake::Shake;
use crate::content::{GrabTuning, ShakeTuning};
use crate::physics::{GameLayer, PhysicsService};

/// Holds at most one scene body. The reference is a relation only: the held
/// body may be despawned by anyone, and every operation checks for that
/// first.
#[derive(Debug, Clone)]
pub struct Grabber {
    tuning: GrabTuning,
    held: Option<Entity>,
    shake: Shake,
}

impl Grabber {
    pub fn new(tuning: &GrabTuning, shake: &ShakeTuning) -> Self {
        Self {
            tuning: tuning.clone(),
            held: None,
            shake: Shake::new(shake),
        }
    }

    /// Last stored reference, not checked for staleness.
    pub fn held(&self) -> Option<Entity> {
        self.held
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    /// Clears a reference to a body that no longer exists.
    fn live_held(&mut self, physics: &impl PhysicsService) -> Option<Entity> {
        let held = self.held?;
        if physics.exists(held) {
            Some(held)
        } else {
            warn!("Held object {:?} no longer exists; clearing", held);
            self.held = None;
            self.shake.cancel();
            None
        }
    }

    fn forward(physics: &impl PhysicsService, model: Entity) -> Option<(Vec3, Dir3)> {
        let origin = physics.translation(model)?;
        let rotation = physics.rotation(model)?;
        let forward = Dir3::new(rotation * Vec3::NEG_Z).ok()?;
        Some((origin, forward))
    }

    /// Ray from the model along its forward axis. Succeeds only when nothing
    /// is held and the first hit is grabbable.
    pub fn grab(&mut self, physics: &mut impl PhysicsService, model: Entity) -> bool {
        if self.live_held(&*physics).is_some() {
            return false;
        }
        let Some((origin, forward)) = Self::forward(&*physics, model) else {
            return false;
        };

        // Everything but the player, so a wall in front blocks the grab.
        let mask = LayerMask(LayerMask::ALL.0 & !GameLayer::Player.to_bits());
        let Some(hit) = physics.raycast(origin, forward, self.tuning.grab_distance, mask) else {
            return false;
        };
        if !hit.is_on(GameLayer::Grabbable) {
            debug!("Grab blocked by {:?} at {:.2}", hit.entity, hit.distance);
            return false;
        }

        physics.reparent(hit.entity, Some(model));
        physics.set_kinematic(hit.entity, true);
        self.held = Some(hit.entity);
        debug!("Grabbed {:?} at {:.2}", hit.entity, hit.distance);
        true
    }

    fn let_go(&mut self, physics: &mut impl PhysicsService, held: Entity) {
        self.shake.cancel();
        physics.reparent(held, None);
        physics.set_kinematic(held, false);
        self.held = None;
    }

    /// Throw the held body along the model's forward at `throw_force`.
    pub fn release(&mut self, physics: &mut impl PhysicsService, model: Entity) -> bool {
        let Some(held) = self.live_held(&*physics) else {
            return false;
        };

        let forward = Self::forward(&*physics, model)
            .map(|(_, forward)| *forward)
            .unwrap_or(Vec3::ZERO);
        self.let_go(physics, held);
        physics.set_velocity(held, forward * self.tuning.throw_force);
        debug!("Released {:?}", held);
        true
    }

    /// Let go of the held body without throwing it.
    pub fn drop_held(&mut self, physics: &mut impl PhysicsService) -> bool {
        let Some(held) = self.live_held(&*physics) else {
            return false;
        };

        self.let_go(physics, held);
        physics.set_velocity(held, Vec3::ZERO);
        physics.set_angular_velocity(held, Vec3::ZERO);
        debug!("Dropped {:?}", held);
        true
    }

    /// Start shaking the held body. No-op if nothing is held or a shake is
    /// already running.
    pub fn shake(&mut self, now: f32, physics: &impl PhysicsService, model: Entity) -> bool {
        let Some(held) = self.live_held(physics) else {
            return false;
        };

        // Shake works in the held body's local frame under the model.
        let held_rotation = physics.rotation(held).unwrap_or(Quat::IDENTITY);
        let model_rotation = physics.rotation(model).unwrap_or(Quat::IDENTITY);
        let rest = model_rotation.inverse() * held_rotation;
        self.shake.try_start(now, rest)
    }

    /// Frame-clock update for an active shake.
    pub fn advance_shake(&mut self, now: f32, physics: &mut impl PhysicsService) {
        if !self.shake.is_active() {
            return;
        }
        let Some(held) = self.live_held(&*physics) else {
            return;
        };
        if let Some(rotation) = self.shake.advance(now) {
            physics.set_rotation(held, rotation);
        }
    }
}
