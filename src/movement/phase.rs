//! Movement domain: phase derived from contact flags, budget and timer.

use crate::collisions::ContactState;
use crate::config::MovementTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

/// Computed on demand each step and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPhase {
    Grounded,
    Airborne { jumps_remaining: u32 },
    OnWall {
        side: WallSide,
        /// The stick timer is running down because input pushes away from the wall.
        unsticking: bool,
    },
}

pub fn classify(
    contacts: ContactState,
    aerial_jumps: u32,
    time_to_wall_unstick: f32,
    tuning: &MovementTuning,
) -> MovementPhase {
    if contacts.below {
        return MovementPhase::Grounded;
    }

    if contacts.on_wall() {
        let side = if contacts.left {
            WallSide::Left
        } else {
            WallSide::Right
        };
        return MovementPhase::OnWall {
            side,
            unsticking: time_to_wall_unstick < tuning.wall_stick_time,
        };
    }

    MovementPhase::Airborne {
        jumps_remaining: tuning.max_aerial_jumps.saturating_sub(aerial_jumps),
    }
}
