mod demo;

use avian2d::prelude::*;
use bevy::prelude::*;
use olympia_kinematics::movement::KinematicControllerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Olympia Kinematics".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 40.0))
        .add_plugins((KinematicControllerPlugin, demo::DemoPlugin))
        .run();
}
