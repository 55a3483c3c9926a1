//! Movement domain: contact state, air jumps, wall sticking and jump vectors.

mod components;
mod phase;
mod resolver;
pub(crate) mod systems;

pub use components::{GameLayer, MovementController};
pub use phase::{MovementPhase, WallSide, classify};
pub use resolver::{
    Jump, JumpKind, WallJumpKind, WallSlide, input_direction, resolve_jump, wall_jump, wall_slide,
};

use bevy::prelude::*;

use crate::config::{MovementTuning, WallSlideVariant};
use crate::movement::systems::{
    reset_contacts, update_collisions, update_raycast_origins, wake_sleeping_bodies,
};

/// Ordering of a controller step.
///
/// `Sense` resets contacts, refreshes ray origins, scans and wakes the body.
/// Callers read contacts and apply jumps or slides in `Resolve`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Sense,
    Resolve,
}

pub struct KinematicControllerPlugin;

impl Plugin for KinematicControllerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementTuning>()
            .register_type::<WallSlideVariant>()
            .configure_sets(Update, (ControllerSet::Sense, ControllerSet::Resolve).chain())
            .add_systems(
                Update,
                (
                    reset_contacts,
                    update_raycast_origins,
                    update_collisions,
                    wake_sleeping_bodies,
                )
                    .chain()
                    .in_set(ControllerSet::Sense),
            );
    }
}
