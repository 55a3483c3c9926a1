//! Movement domain: pure wall slide and jump resolution from contact flags.
//!
//! Nothing here reads or writes ECS state. Each function takes the current
//! flags, budget and timer by value and returns the adjusted values for the
//! caller to store.

use bevy::prelude::*;

use crate::collisions::ContactState;
use crate::config::{MovementTuning, WallSlideVariant};

/// Sign of a horizontal input axis: -1, 0 or +1.
pub fn input_direction(input_x: f32) -> f32 {
    if input_x > 0.0 {
        1.0
    } else if input_x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSlide {
    pub velocity: Vec2,
    pub time_to_wall_unstick: f32,
    /// The stick timer ran out this step and the character lets go of the wall.
    pub fell_off: bool,
}

/// Adjust `velocity` for sliding down a wall and advance the stick timer.
///
/// Inactive (velocity and timer returned unchanged) unless touching a wall
/// while not grounded. [`WallSlideVariant::Clamp`] additionally requires the
/// character to not be moving up.
pub fn wall_slide(
    contacts: ContactState,
    velocity: Vec2,
    input_x: f32,
    dt: f32,
    time_to_wall_unstick: f32,
    tuning: &MovementTuning,
) -> WallSlide {
    let inactive = WallSlide {
        velocity,
        time_to_wall_unstick,
        fell_off: false,
    };

    if !contacts.on_wall() || contacts.below {
        return inactive;
    }

    let wall_dir = contacts.wall_direction();
    let input_dir = input_direction(input_x);
    let pushing_away = input_dir != 0.0 && input_dir != wall_dir;
    let held_timer = if pushing_away {
        time_to_wall_unstick - dt
    } else {
        tuning.wall_stick_time
    };

    match tuning.wall_slide_variant {
        WallSlideVariant::Clamp => {
            if velocity.y > 0.0 {
                return inactive;
            }

            let slowed = Vec2::new(0.0, velocity.y.max(-tuning.wall_slide_speed_max));
            if time_to_wall_unstick > 0.0 {
                WallSlide {
                    velocity: slowed,
                    time_to_wall_unstick: held_timer,
                    fell_off: false,
                }
            } else {
                WallSlide {
                    velocity: Vec2::new(velocity.x, slowed.y),
                    time_to_wall_unstick: tuning.wall_stick_time,
                    fell_off: true,
                }
            }
        }
        WallSlideVariant::Fixed => {
            let sliding = Vec2::new(0.0, -tuning.wall_slide_speed_max);
            if time_to_wall_unstick > 0.0 {
                WallSlide {
                    velocity: sliding,
                    time_to_wall_unstick: held_timer,
                    fell_off: false,
                }
            } else if pushing_away {
                WallSlide {
                    velocity: Vec2::new(tuning.wall_fall.x * -wall_dir, tuning.wall_fall.y),
                    time_to_wall_unstick: tuning.wall_stick_time,
                    fell_off: true,
                }
            } else {
                WallSlide {
                    velocity: sliding,
                    time_to_wall_unstick: tuning.wall_stick_time,
                    fell_off: false,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallJumpKind {
    /// No horizontal input.
    Off,
    /// Input towards the wall.
    Climb,
    /// Input away from the wall.
    Leap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall(WallJumpKind),
    Aerial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jump {
    /// Zero when no jump is available.
    pub velocity: Vec2,
    pub aerial_jumps: u32,
    pub kind: Option<JumpKind>,
}

/// Wall jump vector for the current contacts, mirrored away from the wall.
///
/// The wall test is `left || (right && !below)`: a left wall qualifies even
/// while grounded, a right wall does not.
pub fn wall_jump(
    contacts: ContactState,
    input_x: f32,
    tuning: &MovementTuning,
) -> Option<(WallJumpKind, Vec2)> {
    if !(contacts.left || (contacts.right && !contacts.below)) {
        return None;
    }

    let wall_dir = contacts.wall_direction();
    let input_dir = input_direction(input_x);

    let (kind, mut force) = if input_dir == 0.0 {
        (WallJumpKind::Off, tuning.wall_jump_off)
    } else if input_dir == wall_dir {
        (WallJumpKind::Climb, tuning.wall_jump_climb)
    } else {
        (WallJumpKind::Leap, tuning.wall_leap)
    };

    force.x *= -wall_dir;
    Some((kind, force))
}

/// Pick the jump for this step: ground, then wall, then aerial, else none.
pub fn resolve_jump(
    contacts: ContactState,
    aerial_jumps: u32,
    input_x: f32,
    tuning: &MovementTuning,
) -> Jump {
    if contacts.below {
        return Jump {
            velocity: Vec2::Y * tuning.max_jump_force,
            aerial_jumps: 0,
            kind: Some(JumpKind::Ground),
        };
    }

    if let Some((kind, velocity)) = wall_jump(contacts, input_x, tuning) {
        return Jump {
            velocity,
            aerial_jumps,
            kind: Some(JumpKind::Wall(kind)),
        };
    }

    if !contacts.on_wall() && aerial_jumps < tuning.max_aerial_jumps {
        return Jump {
            velocity: Vec2::Y * tuning.max_jump_force,
            aerial_jumps: aerial_jumps + 1,
            kind: Some(JumpKind::Aerial),
        };
    }

    Jump {
        velocity: Vec2::ZERO,
        aerial_jumps,
        kind: None,
    }
}
