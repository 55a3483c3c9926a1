//! Demo domain: caller-side locomotion built on the controller's contacts.

use avian2d::prelude::*;
use bevy::prelude::*;
use olympia_kinematics::config::MovementTuning;
use olympia_kinematics::movement::MovementController;
#[cfg(feature = "dev-tools")]
use olympia_kinematics::movement::MovementPhase;

use crate::demo::{DemoPlayer, Facing, LocomotionState, MovementInput, WALL_JUMP_LOCK_TIME};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<&mut LocomotionState, With<DemoPlayer>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if state.dash_timer > 0.0 {
            state.dash_timer -= dt;
        }
        if state.dash_cooldown_timer > 0.0 {
            state.dash_cooldown_timer -= dt;
        }
        if state.wall_jump_lock > 0.0 {
            state.wall_jump_lock -= dt;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut LocomotionState, With<DemoPlayer>>,
) {
    for mut state in &mut query {
        if state.wall_jump_lock > 0.0 || state.is_dashing() {
            continue;
        }

        if input.axis_x > 0.0 {
            state.facing = Facing::Right;
        } else if input.axis_x < 0.0 {
            state.facing = Facing::Left;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    mut query: Query<(&MovementTuning, &LocomotionState, &mut LinearVelocity), With<DemoPlayer>>,
) {
    for (tuning, state, mut velocity) in &mut query {
        if state.is_dashing() || state.wall_jump_lock > 0.0 {
            continue;
        }

        velocity.x = input.axis_x * tuning.movement_speed;
    }
}

pub(crate) fn apply_wall_slide(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MovementController,
            &MovementTuning,
            &LocomotionState,
            &mut LinearVelocity,
        ),
        With<DemoPlayer>,
    >,
) {
    let dt = time.delta_secs();

    for (mut controller, tuning, state, mut velocity) in &mut query {
        if state.is_dashing() {
            continue;
        }

        velocity.0 = controller.handle_wall_sliding(velocity.0, input.axis_x, dt, tuning);
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MovementController,
            &MovementTuning,
            &mut LocomotionState,
            &mut LinearVelocity,
        ),
        With<DemoPlayer>,
    >,
) {
    for (mut controller, tuning, mut state, mut velocity) in &mut query {
        if state.is_dashing() {
            continue;
        }

        if input.jump_just_pressed {
            let jump = controller.jump_velocity(input.axis_x, tuning);

            if jump != Vec2::ZERO {
                velocity.y = jump.y;
                // Only wall jumps carry a horizontal component.
                if jump.x != 0.0 {
                    velocity.x = jump.x;
                    state.wall_jump_lock = WALL_JUMP_LOCK_TIME;
                }
            }
        }

        // Variable jump height - releasing early caps the rise
        if !input.jump_held && !controller.contacts().below && velocity.y > tuning.min_jump_force
        {
            velocity.y = tuning.min_jump_force;
        }
    }
}

pub(crate) fn apply_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MovementController,
            &MovementTuning,
            &mut LocomotionState,
            &mut LinearVelocity,
        ),
        With<DemoPlayer>,
    >,
) {
    for (mut controller, tuning, mut state, mut velocity) in &mut query {
        if input.dash_just_pressed && state.dash_cooldown_timer <= 0.0 && !state.is_dashing() {
            state.dash_timer = tuning.dash_duration;
            state.dash_cooldown_timer = tuning.dash_cooldown;
            state.dash_direction = if input.axis_x != 0.0 {
                input.axis_x.signum()
            } else {
                state.facing.sign()
            };
            controller.last_dash = Some(time.elapsed_secs());
            debug!("Dash: direction={}", state.dash_direction);
        }

        if state.is_dashing() {
            velocity.x = state.dash_direction * tuning.dash_force;
            velocity.y = 0.0;
        }
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn log_phase_changes(
    mut last: Local<Option<MovementPhase>>,
    query: Query<(&MovementController, &MovementTuning), With<DemoPlayer>>,
) {
    for (controller, tuning) in &query {
        let phase = controller.phase(tuning);
        if *last != Some(phase) {
            debug!("Phase: {:?}", phase);
            *last = Some(phase);
        }
    }
}
