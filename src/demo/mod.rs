//! Demo domain: a keyboard-driven character in a test room.
//!
//! This is the caller side of the controller: it owns input, horizontal
//! speed, facing, variable jump height and the dash, and applies the
//! controller's jump and wall slide vectors to the physics body.

mod input;
mod locomotion;
mod room;

use bevy::prelude::*;
use olympia_kinematics::movement::ControllerSet;

use crate::demo::input::read_input;
use crate::demo::locomotion::{
    apply_dash, apply_horizontal_movement, apply_jump, apply_wall_slide, update_facing,
    update_timers,
};
use crate::demo::room::{spawn_camera, spawn_player, spawn_test_room};

#[derive(Component, Debug)]
pub struct DemoPlayer;

#[derive(Component, Debug, Default)]
pub struct LocomotionState {
    pub facing: Facing,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
    pub dash_direction: f32,
    /// Blocks horizontal input right after a wall jump.
    pub wall_jump_lock: f32,
}

impl LocomotionState {
    pub fn is_dashing(&self) -> bool {
        self.dash_timer > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}

/// Seconds of locked horizontal control after a wall jump.
pub const WALL_JUMP_LOCK_TIME: f32 = 0.15;

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_camera, spawn_test_room, spawn_player))
            .add_systems(Update, read_input.before(ControllerSet::Resolve))
            .add_systems(
                Update,
                (
                    update_timers,
                    update_facing,
                    apply_horizontal_movement,
                    apply_wall_slide,
                    apply_jump,
                    apply_dash,
                )
                    .chain()
                    .in_set(ControllerSet::Resolve),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            locomotion::log_phase_changes.after(ControllerSet::Sense),
        );
    }
}
