//! Controller domain: input translation and the two update clocks.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::{ControllerClock, ControllerStatus, PlayerController};
use super::events::ControllerCommand;
use crate::movement::{CameraBasis, OrbitCamera};
use crate::physics::AvianPhysics;

/// Keyboard to [`ControllerCommand`], sending only performed transitions.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut last_axis: Local<Vec2>,
    mut commands: MessageWriter<ControllerCommand>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        axis.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        axis.x += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        axis.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        axis.y += 1.0;
    }
    let axis = axis.clamp_length_max(1.0);

    if axis != *last_axis {
        if axis == Vec2::ZERO {
            commands.write(ControllerCommand::MoveCancelled);
        } else {
            commands.write(ControllerCommand::Move(axis));
        }
        *last_axis = axis;
    }

    let presses = [
        (KeyCode::Space, ControllerCommand::Jump),
        (KeyCode::ShiftLeft, ControllerCommand::Dash),
        (KeyCode::KeyE, ControllerCommand::Grab),
        (KeyCode::KeyF, ControllerCommand::Release),
        (KeyCode::KeyQ, ControllerCommand::Drop),
        (KeyCode::KeyR, ControllerCommand::Shake),
    ];
    for (key, command) in presses {
        if keyboard.just_pressed(key) {
            commands.write(command);
        }
    }
}

/// Apply queued commands on the fixed clock, before the fixed tick.
pub(crate) fn dispatch_commands(
    fixed_time: Res<Time>,
    real_time: Res<Time<Virtual>>,
    mut incoming: MessageReader<ControllerCommand>,
    mut physics: AvianPhysics,
    mut controllers: Query<&mut PlayerController>,
    cameras: Query<&OrbitCamera>,
) {
    let clock = ControllerClock {
        fixed: fixed_time.elapsed_secs(),
        frame: real_time.elapsed_secs(),
    };
    let camera = cameras.iter().next().map(|c| c as &dyn CameraBasis);

    for command in incoming.read() {
        for mut controller in &mut controllers {
            if !controller.handle(*command, clock, &mut physics, camera) {
                debug!("Command {:?} had no effect", command);
            }
        }
    }
}

pub(crate) fn fixed_tick(
    time: Res<Time>,
    mut physics: AvianPhysics,
    mut controllers: Query<&mut PlayerController>,
    cameras: Query<&OrbitCamera>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();
    let camera = cameras.iter().next().map(|c| c as &dyn CameraBasis);

    for mut controller in &mut controllers {
        controller.fixed_tick(now, dt, &mut physics, camera);
    }
}

pub(crate) fn frame_tick(
    time: Res<Time>,
    mut physics: AvianPhysics,
    mut controllers: Query<(&mut PlayerController, &mut ControllerStatus)>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (mut controller, mut status) in &mut controllers {
        controller.frame_tick(now, dt, &mut physics);
        status.set_if_neq(controller.status());
    }
}
