//! Controller domain: the per-actor controller and its published status.

use bevy::prelude::*;

use super::events::ControllerCommand;
use crate::abilities::{Dash, Fuel, Hover, Jump};
use crate::content::ControllerTuning;
use crate::interaction::Grabber;
use crate::movement::{CameraBasis, GroundProbe, Locomotion, facing_forward};
use crate::physics::PhysicsService;

/// Read-only status for presentation layers.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerStatus {
    pub grounded: bool,
    pub fuel_fraction: f32,
    pub dashing: bool,
    pub hovering: bool,
    pub holding: bool,
}

/// The two clocks the controller runs on, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerClock {
    /// Elapsed fixed-step time. Drives dash, jump and hover.
    pub fixed: f32,
    /// Elapsed real (frame) time. Drives shake.
    pub frame: f32,
}

/// Locomotion, abilities and interaction for one actor.
///
/// Built once from a copy of the tuning; the tuning is never changed
/// afterwards. Grounded state is only written by [`Self::fixed_tick`].
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    body: Entity,
    model: Entity,
    move_input: Vec2,
    grounded: bool,
    probe: GroundProbe,
    locomotion: Locomotion,
    dash: Dash,
    jump: Jump,
    hover: Hover,
    fuel: Fuel,
    grabber: Grabber,
}

impl PlayerController {
    /// `body` is the rigid body; `model` is the visual child that turns and
    /// carries held objects.
    pub fn new(body: Entity, model: Entity, tuning: &ControllerTuning) -> Self {
        Self {
            body,
            model,
            move_input: Vec2::ZERO,
            grounded: false,
            probe: GroundProbe::new(&tuning.ground_probe),
            locomotion: Locomotion::new(&tuning.locomotion),
            dash: Dash::new(&tuning.dash),
            jump: Jump::new(&tuning.jump),
            hover: Hover::new(&tuning.hover, &tuning.fuel),
            fuel: Fuel::new(&tuning.fuel),
            grabber: Grabber::new(&tuning.grab, &tuning.shake),
        }
    }

    pub fn body(&self) -> Entity {
        self.body
    }

    pub fn model(&self) -> Entity {
        self.model
    }

    pub fn move_input(&self) -> Vec2 {
        self.move_input
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn probe(&self) -> &GroundProbe {
        &self.probe
    }

    pub fn dash(&self) -> &Dash {
        &self.dash
    }

    pub fn jump(&self) -> &Jump {
        &self.jump
    }

    pub fn hover(&self) -> &Hover {
        &self.hover
    }

    pub fn fuel(&self) -> &Fuel {
        &self.fuel
    }

    pub fn grabber(&self) -> &Grabber {
        &self.grabber
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            grounded: self.grounded,
            fuel_fraction: self.fuel.fraction(),
            dashing: self.dash.is_active(),
            hovering: self.hover.is_active(),
            holding: self.grabber.held().is_some(),
        }
    }

    pub fn on_movement(&mut self, input: Vec2) {
        self.move_input = input;
    }

    pub fn on_movement_cancelled(&mut self) {
        self.move_input = Vec2::ZERO;
    }

    /// Jump when grounded, otherwise try to hover.
    pub fn on_jump(&mut self, now: f32, physics: &mut impl PhysicsService) -> bool {
        if self.grounded {
            self.jump.try_start(now, self.grounded, physics, self.body)
        } else {
            self.hover.try_start(
                now,
                self.grounded,
                self.jump.last_jump_time(),
                &mut self.fuel,
            )
        }
    }

    /// Dash along the current move direction, or along the facing when the
    /// actor is standing still.
    pub fn on_dash(
        &mut self,
        now: f32,
        physics: &mut impl PhysicsService,
        camera: Option<&dyn CameraBasis>,
    ) -> bool {
        let facing = physics.rotation(self.model).unwrap_or(Quat::IDENTITY);
        let moving = self
            .locomotion
            .move_direction(self.move_input, facing, camera)
            .normalize_or_zero();
        let direction = if moving != Vec3::ZERO {
            moving
        } else {
            facing_forward(facing)
        };

        self.dash
            .try_start(now, direction, self.grounded, physics, self.body)
    }

    pub fn grab(&mut self, physics: &mut impl PhysicsService) -> bool {
        self.grabber.grab(physics, self.model)
    }

    pub fn release(&mut self, physics: &mut impl PhysicsService) -> bool {
        self.grabber.release(physics, self.model)
    }

    pub fn drop_held(&mut self, physics: &mut impl PhysicsService) -> bool {
        self.grabber.drop_held(physics)
    }

    pub fn shake(&mut self, now: f32, physics: &impl PhysicsService) -> bool {
        self.grabber.shake(now, physics, self.model)
    }

    /// Route one input command. Returns whether it changed any state.
    pub fn handle(
        &mut self,
        command: ControllerCommand,
        clock: ControllerClock,
        physics: &mut impl PhysicsService,
        camera: Option<&dyn CameraBasis>,
    ) -> bool {
        match command {
            ControllerCommand::Move(input) => {
                self.on_movement(input);
                true
            }
            ControllerCommand::MoveCancelled => {
                self.on_movement_cancelled();
                true
            }
            ControllerCommand::Jump => self.on_jump(clock.fixed, physics),
            ControllerCommand::Dash => self.on_dash(clock.fixed, physics, camera),
            ControllerCommand::Grab => self.grab(physics),
            ControllerCommand::Release => self.release(physics),
            ControllerCommand::Drop => self.drop_held(physics),
            ControllerCommand::Shake => self.shake(clock.frame, &*physics),
        }
    }

    /// Fixed-step update: probe, abilities, then locomotion.
    pub fn fixed_tick(
        &mut self,
        now: f32,
        dt: f32,
        physics: &mut impl PhysicsService,
        camera: Option<&dyn CameraBasis>,
    ) {
        let grounded = self.probe.is_grounded(&*physics, self.body);
        if grounded && !self.grounded {
            debug!("Landed at {:.3}", now);
        } else if !grounded && self.grounded {
            debug!("Left ground at {:.3}", now);
        }
        self.grounded = grounded;

        self.dash.step(now, physics, self.body);

        let facing = physics.rotation(self.model).unwrap_or(Quat::IDENTITY);
        let step = self.locomotion.tick(dt, self.move_input, facing, camera);

        // A dash owns the velocity for its whole window.
        if !self.dash.is_active() {
            let vertical = physics.velocity(self.body).y;
            physics.set_velocity(
                self.body,
                Vec3::new(step.velocity.x, vertical, step.velocity.z),
            );
        }

        match step.angular_velocity {
            Some(angular_velocity) => physics.set_angular_velocity(self.body, angular_velocity),
            None => physics.set_rotation(self.model, step.rotation),
        }

        self.hover.step(now, physics, self.body);
    }

    /// Frame update: fuel regeneration and shake.
    pub fn frame_tick(&mut self, now: f32, dt: f32, physics: &mut impl PhysicsService) {
        self.fuel
            .regenerate(dt, self.hover.is_active(), self.grounded);
        self.grabber.advance_shake(now, physics);
    }
}
