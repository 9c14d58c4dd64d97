//! Movement domain: ground contact probe.

use avian3d::prelude::LayerMask;
use bevy::prelude::*;

use crate::content::GroundProbeTuning;
use crate::physics::{GameLayer, PhysicsService};

/// Sphere overlap at `actor_position + offset` against the ground layer.
#[derive(Debug, Clone)]
pub struct GroundProbe {
    offset: Vec3,
    radius: f32,
    mask: LayerMask,
}

impl GroundProbe {
    pub fn new(tuning: &GroundProbeTuning) -> Self {
        Self {
            offset: tuning.offset,
            radius: tuning.radius,
            mask: GameLayer::Ground.into(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn probe_point(&self, actor_position: Vec3) -> Vec3 {
        actor_position + self.offset
    }

    /// Pure query. A body that no longer exists is never grounded.
    pub fn is_grounded(&self, physics: &impl PhysicsService, body: Entity) -> bool {
        let Some(position) = physics.translation(body) else {
            return false;
        };
        physics.overlap_sphere(self.probe_point(position), self.radius, self.mask)
    }
}
