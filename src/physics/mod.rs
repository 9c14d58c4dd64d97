//! Physics domain: the query/force service the controller core talks to.
//!
//! The controller never touches avian components directly. Everything it
//! needs from the scene goes through [`PhysicsService`], which keeps the core
//! testable against an in-memory fake.

mod avian;
#[cfg(test)]
pub(crate) mod fake;

use avian3d::prelude::*;
use bevy::prelude::*;

pub use avian::AvianPhysics;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces checked by the ground probe
    Ground,
    /// Player character
    Player,
    /// Bodies the player may pick up
    Grabbable,
}

/// How a force passed to [`PhysicsService::add_force`] is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum ForceMode {
    /// Momentum change, scaled by inverse mass.
    Impulse,
    /// Direct velocity change, mass ignored.
    VelocityChange,
    /// Acceleration applied over one step, mass ignored.
    Acceleration,
    /// Force applied over one step, scaled by inverse mass.
    Force,
}

impl ForceMode {
    /// Velocity delta this mode produces for `force` over a step of `dt`.
    pub fn velocity_delta(self, force: Vec3, mass: f32, dt: f32) -> Vec3 {
        let inv_mass = if mass > 0.0 { mass.recip() } else { 0.0 };
        match self {
            ForceMode::Impulse => force * inv_mass,
            ForceMode::VelocityChange => force,
            ForceMode::Acceleration => force * dt,
            ForceMode::Force => force * inv_mass * dt,
        }
    }
}

/// First body hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    /// Layer memberships of the hit collider.
    pub layers: LayerMask,
}

impl RayHit {
    pub fn is_on(&self, layer: GameLayer) -> bool {
        self.layers.0 & layer.to_bits() != 0
    }
}

/// Scene queries and rigid-body mutation used by the controller.
///
/// Reads on a body that no longer exists return `None` / zero; writes on such
/// a body are ignored.
pub trait PhysicsService {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    fn overlap_sphere(&self, point: Vec3, radius: f32, mask: LayerMask) -> bool;

    fn exists(&self, body: Entity) -> bool;

    /// World-space position.
    fn translation(&self, body: Entity) -> Option<Vec3>;

    /// World-space rotation.
    fn rotation(&self, body: Entity) -> Option<Quat>;

    fn velocity(&self, body: Entity) -> Vec3;

    fn set_velocity(&mut self, body: Entity, velocity: Vec3);

    fn set_angular_velocity(&mut self, body: Entity, angular_velocity: Vec3);

    fn add_force(&mut self, body: Entity, force: Vec3, mode: ForceMode);

    /// Sets the body's rotation relative to its parent.
    fn set_rotation(&mut self, body: Entity, rotation: Quat);

    fn set_kinematic(&mut self, body: Entity, kinematic: bool);

    /// Moves `body` under `parent` (or back to the root) keeping its world
    /// transform.
    fn reparent(&mut self, body: Entity, parent: Option<Entity>);
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default());
    }
}
