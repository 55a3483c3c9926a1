//! Which sides of the character were blocked during the last scan.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ContactState {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

impl ContactState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn on_wall(&self) -> bool {
        self.left || self.right
    }

    /// -1 when touching a wall on the left, +1 otherwise.
    pub fn wall_direction(&self) -> f32 {
        if self.left { -1.0 } else { 1.0 }
    }
}
