//! Physics domain: in-memory [`PhysicsService`] for unit tests.

use std::collections::HashMap;

use avian3d::prelude::LayerMask;
use bevy::ecs::world::World;
use bevy::prelude::*;

use super::{ForceMode, PhysicsService, RayHit};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeBody {
    pub translation: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f32,
    pub kinematic: bool,
    pub parent: Option<Entity>,
}

pub(crate) struct FakePhysics {
    world: World,
    pub bodies: HashMap<Entity, FakeBody>,
    /// Answer for every raycast that reaches it.
    pub ray_hit: Option<RayHit>,
    /// Answer for every overlap query.
    pub ground_contact: bool,
    pub step: f32,
    pub forces: Vec<(Entity, Vec3, ForceMode)>,
}

impl Default for FakePhysics {
    fn default() -> Self {
        Self {
            world: World::new(),
            bodies: HashMap::new(),
            ray_hit: None,
            ground_contact: false,
            step: 1.0 / 60.0,
            forces: Vec::new(),
        }
    }
}

impl FakePhysics {
    pub fn spawn_body(&mut self, translation: Vec3) -> Entity {
        let entity = self.world.spawn_empty().id();
        self.bodies.insert(
            entity,
            FakeBody {
                translation,
                rotation: Quat::IDENTITY,
                mass: 1.0,
                ..default()
            },
        );
        entity
    }

    /// Simulates the body being despawned by something else in the scene.
    pub fn despawn(&mut self, body: Entity) {
        self.bodies.remove(&body);
    }

    pub fn body(&self, body: Entity) -> &FakeBody {
        &self.bodies[&body]
    }

    pub fn body_mut(&mut self, body: Entity) -> &mut FakeBody {
        self.bodies.get_mut(&body).unwrap()
    }
}

impl PhysicsService for FakePhysics {
    fn raycast(
        &self,
        _origin: Vec3,
        _direction: Dir3,
        max_distance: f32,
        _mask: LayerMask,
    ) -> Option<RayHit> {
        self.ray_hit.filter(|hit| hit.distance <= max_distance)
    }

    fn overlap_sphere(&self, _point: Vec3, _radius: f32, _mask: LayerMask) -> bool {
        self.ground_contact
    }

    fn exists(&self, body: Entity) -> bool {
        self.bodies.contains_key(&body)
    }

    fn translation(&self, body: Entity) -> Option<Vec3> {
        self.bodies.get(&body).map(|b| b.translation)
    }

    fn rotation(&self, body: Entity) -> Option<Quat> {
        self.bodies.get(&body).map(|b| b.rotation)
    }

    fn velocity(&self, body: Entity) -> Vec3 {
        self.bodies.get(&body).map(|b| b.velocity).unwrap_or(Vec3::ZERO)
    }

    fn set_velocity(&mut self, body: Entity, velocity: Vec3) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.velocity = velocity;
        }
    }

    fn set_angular_velocity(&mut self, body: Entity, angular_velocity: Vec3) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.angular_velocity = angular_velocity;
        }
    }

    fn add_force(&mut self, body: Entity, force: Vec3, mode: ForceMode) {
        let step = self.step;
        if let Some(b) = self.bodies.get_mut(&body) {
            b.velocity += mode.velocity_delta(force, b.mass, step);
            self.forces.push((body, force, mode));
        }
    }

    fn set_rotation(&mut self, body: Entity, rotation: Quat) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.rotation = rotation;
        }
    }

    fn set_kinematic(&mut self, body: Entity, kinematic: bool) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.kinematic = kinematic;
            if kinematic {
                b.velocity = Vec3::ZERO;
                b.angular_velocity = Vec3::ZERO;
            }
        }
    }

    fn reparent(&mut self, body: Entity, parent: Option<Entity>) {
        if let Some(b) = self.bodies.get_mut(&body) {
            b.parent = parent;
        }
    }
}
