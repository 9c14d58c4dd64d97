use bevy::prelude::*;

use mischief_movement::CharacterControllerPlugins;
use mischief_movement::content::ContentPlugin;
use mischief_movement::movement::spawn_player;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mischief Makers".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ContentPlugin::default())
        .add_plugins(CharacterControllerPlugins)
        .add_systems(Startup, spawn_player)
        .run();
}
