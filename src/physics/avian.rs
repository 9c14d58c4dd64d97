//! Physics domain: [`PhysicsService`] backed by avian3d.

use avian3d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::{ForceMode, PhysicsService, RayHit};

type BodyData = (
    &'static mut Transform,
    &'static GlobalTransform,
    Option<&'static mut LinearVelocity>,
    Option<&'static mut AngularVelocity>,
    Option<&'static ComputedMass>,
);

/// System parameter exposing avian's spatial queries and body state through
/// [`PhysicsService`].
///
/// Kinematic and parenting changes go through `Commands` and land when the
/// command queue is applied; velocity and rotation writes are immediate.
#[derive(SystemParam)]
pub struct AvianPhysics<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    time: Res<'w, Time>,
    commands: Commands<'w, 's>,
    bodies: Query<'w, 's, BodyData>,
    layers: Query<'w, 's, &'static CollisionLayers>,
}

impl PhysicsService for AvianPhysics<'_, '_> {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let filter = SpatialQueryFilter::from_mask(mask);
        let hit = self
            .spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)?;

        let layers = self
            .layers
            .get(hit.entity)
            .map(|layers| layers.memberships)
            .unwrap_or(CollisionLayers::default().memberships);

        Some(RayHit {
            entity: hit.entity,
            distance: hit.distance,
            layers,
        })
    }

    fn overlap_sphere(&self, point: Vec3, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .spatial_query
            .shape_intersections(&Collider::sphere(radius), point, Quat::IDENTITY, &filter)
            .is_empty()
    }

    fn exists(&self, body: Entity) -> bool {
        self.bodies.contains(body)
    }

    fn translation(&self, body: Entity) -> Option<Vec3> {
        self.bodies
            .get(body)
            .ok()
            .map(|(_, global, ..)| global.translation())
    }

    fn rotation(&self, body: Entity) -> Option<Quat> {
        self.bodies
            .get(body)
            .ok()
            .map(|(_, global, ..)| global.compute_transform().rotation)
    }

    fn velocity(&self, body: Entity) -> Vec3 {
        self.bodies
            .get(body)
            .ok()
            .and_then(|(_, _, velocity, ..)| velocity.map(|v| v.0))
            .unwrap_or(Vec3::ZERO)
    }

    fn set_velocity(&mut self, body: Entity, velocity: Vec3) {
        if let Ok((_, _, Some(mut linear), ..)) = self.bodies.get_mut(body) {
            linear.0 = velocity;
        }
    }

    fn set_angular_velocity(&mut self, body: Entity, angular_velocity: Vec3) {
        if let Ok((_, _, _, Some(mut angular), _)) = self.bodies.get_mut(body) {
            angular.0 = angular_velocity;
        }
    }

    fn add_force(&mut self, body: Entity, force: Vec3, mode: ForceMode) {
        let dt = self.time.delta_secs();
        if let Ok((_, _, Some(mut linear), _, mass)) = self.bodies.get_mut(body) {
            let mass = mass.map(|m| m.value()).unwrap_or(1.0);
            linear.0 += mode.velocity_delta(force, mass, dt);
        }
    }

    fn set_rotation(&mut self, body: Entity, rotation: Quat) {
        if let Ok((mut transform, ..)) = self.bodies.get_mut(body) {
            transform.rotation = rotation;
        }
    }

    fn set_kinematic(&mut self, body: Entity, kinematic: bool) {
        if !self.bodies.contains(body) {
            return;
        }

        if kinematic {
            // Held bodies must not drift on their own.
            if let Ok((_, _, linear, angular, _)) = self.bodies.get_mut(body) {
                if let Some(mut linear) = linear {
                    linear.0 = Vec3::ZERO;
                }
                if let Some(mut angular) = angular {
                    angular.0 = Vec3::ZERO;
                }
            }
            self.commands.entity(body).insert(RigidBody::Kinematic);
        } else {
            self.commands.entity(body).insert(RigidBody::Dynamic);
        }
    }

    fn reparent(&mut self, body: Entity, parent: Option<Entity>) {
        if !self.bodies.contains(body) {
            return;
        }

        match parent {
            Some(parent) => {
                self.commands.entity(body).set_parent_in_place(parent);
            }
            None => {
                self.commands.entity(body).remove_parent_in_place();
            }
        }
    }
}
