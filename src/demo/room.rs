//! Demo domain: camera, test room geometry and the player character.

use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;
use olympia_kinematics::config::load_tuning_or_default;
use olympia_kinematics::movement::{GameLayer, MovementController};

use crate::demo::{DemoPlayer, LocomotionState};

/// World units per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 32.0;

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 4.0, 0.0).with_scale(Vec3::splat(CAMERA_SCALE)),
    ));
}

fn spawn_block(
    commands: &mut Commands,
    layer: GameLayer,
    color: Color,
    size: Vec2,
    transform: Transform,
) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        transform,
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let slope_color = Color::srgb(0.45, 0.55, 0.35);

    // Floor and enclosing walls
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        ground_color,
        Vec2::new(34.0, 1.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    );
    for x in [-17.5, 17.5] {
        spawn_block(
            &mut commands,
            GameLayer::Wall,
            wall_color,
            Vec2::new(1.0, 20.0),
            Transform::from_xyz(x, 10.0, 0.0),
        );
    }

    // Platforms
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        platform_color,
        Vec2::new(6.0, 0.5),
        Transform::from_xyz(-10.0, 4.0, 0.0),
    );
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        platform_color,
        Vec2::new(5.0, 0.5),
        Transform::from_xyz(0.0, 8.0, 0.0),
    );

    // Walkable ramp rising to the right
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        slope_color,
        Vec2::new(6.0, 0.5),
        Transform::from_xyz(8.0, 1.2, 0.0).with_rotation(Quat::from_rotation_z(30f32.to_radians())),
    );

    // Too steep to stand on
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        slope_color,
        Vec2::new(5.0, 0.5),
        Transform::from_xyz(13.5, 3.0, 0.0).with_rotation(Quat::from_rotation_z(75f32.to_radians())),
    );

    // Pillar for wall jump practice
    spawn_block(
        &mut commands,
        GameLayer::Wall,
        wall_color,
        Vec2::new(1.0, 8.0),
        Transform::from_xyz(-4.0, 4.0, 0.0),
    );
}

pub(crate) fn spawn_player(mut commands: Commands) {
    let tuning = load_tuning_or_default(Path::new("assets/data"));
    let size = Vec2::new(1.0, 2.0);

    info!(
        "Spawning player: speed={}, jump={}, aerial_jumps={}, wall_slide={:?}",
        tuning.movement_speed,
        tuning.max_jump_force,
        tuning.max_aerial_jumps,
        tuning.wall_slide_variant
    );

    commands.spawn((
        // Identity & controller
        (
            DemoPlayer,
            MovementController::new(&tuning),
            tuning,
            LocomotionState::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
