//! Movement domain: player and scene bootstrap for the demo.
//!
//! The `spawn_*` helpers add only the physics side of each entity so the same
//! scene can be built without a renderer; [`spawn_player`] dresses them with
//! meshes.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::camera::OrbitCamera;
use super::components::{Ground, Player, PlayerModel};
use crate::content::{ControllerTuning, RotationMode};
use crate::controller::{ControllerStatus, PlayerController};
use crate::physics::GameLayer;

const PLAYER_RADIUS: f32 = 0.5;
const PLAYER_HEIGHT: f32 = 1.0;
const CRATE_SIZE: f32 = 0.6;

/// Static walkable box on the ground layer.
pub fn spawn_ledge(commands: &mut Commands, size: Vec3, translation: Vec3) -> Entity {
    commands
        .spawn((
            Ground,
            Transform::from_translation(translation),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
        ))
        .id()
}

/// Dynamic crate the player can pick up.
pub fn spawn_grabbable(commands: &mut Commands, translation: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(translation),
            RigidBody::Dynamic,
            Collider::cuboid(CRATE_SIZE, CRATE_SIZE, CRATE_SIZE),
            CollisionLayers::new(GameLayer::Grabbable, LayerMask::ALL),
        ))
        .id()
}

/// Capsule body with its visual model child and controller. The body's
/// centre sits at `translation`. Returns `(body, model)`.
pub fn spawn_actor(
    commands: &mut Commands,
    tuning: &ControllerTuning,
    translation: Vec3,
) -> (Entity, Entity) {
    // Angular-velocity turning needs the body free to yaw.
    let locked_axes = match tuning.locomotion.rotation_mode {
        RotationMode::RotateTowards => LockedAxes::ROTATION_LOCKED,
        RotationMode::AngularVelocity => LockedAxes::new().lock_rotation_x().lock_rotation_z(),
    };

    let model = commands
        .spawn((PlayerModel, Transform::default(), Visibility::default()))
        .id();

    let body = commands
        .spawn((
            Player,
            Transform::from_translation(translation),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_HEIGHT),
            locked_axes,
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Default, GameLayer::Ground, GameLayer::Grabbable],
            ),
        ))
        .add_child(model)
        .id();

    commands.entity(body).insert((
        PlayerController::new(body, model, tuning),
        ControllerStatus::default(),
    ));

    (body, model)
}

/// Spawn the ground, a crate on a ledge, the player and its orbit camera.
pub fn spawn_player(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_size = Vec3::new(40.0, 0.5, 40.0);
    let ground = spawn_ledge(&mut commands, ground_size, Vec3::new(0.0, -0.25, 0.0));
    commands.entity(ground).insert((
        Mesh3d(meshes.add(Cuboid::from_size(ground_size))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.4, 0.35))),
    ));

    // The crate rests at the height of the model's forward ray so a grab
    // from level ground reaches it.
    let ledge_size = Vec3::new(1.0, 0.7, 1.0);
    let ledge = spawn_ledge(&mut commands, ledge_size, Vec3::new(0.0, 0.35, -3.0));
    commands.entity(ledge).insert((
        Mesh3d(meshes.add(Cuboid::from_size(ledge_size))),
        MeshMaterial3d(materials.add(Color::srgb(0.45, 0.45, 0.5))),
    ));

    let resting_on_ledge = Vec3::new(0.0, ledge_size.y + CRATE_SIZE * 0.5, -3.0);
    let crate_body = spawn_grabbable(&mut commands, resting_on_ledge);
    commands.entity(crate_body).insert((
        Mesh3d(meshes.add(Cuboid::new(CRATE_SIZE, CRATE_SIZE, CRATE_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.75, 0.55, 0.3))),
    ));

    let (body, model) = spawn_actor(&mut commands, &tuning, Vec3::new(0.0, 1.5, 0.0));
    commands.entity(model).insert((
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
    ));

    commands.spawn((Camera3d::default(), OrbitCamera::new(body), Transform::default()));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Spawned player {:?} with model {:?}", body, model);
}
