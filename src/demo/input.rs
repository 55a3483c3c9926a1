//! Demo domain: keyboard sampling into [`MovementInput`].

use bevy::prelude::*;

use crate::demo::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// -1, 0 or +1. Holding both directions cancels out.
fn horizontal_axis(keyboard: &ButtonInput<KeyCode>) -> f32 {
    let mut x = 0.0;
    if keyboard.any_pressed(LEFT) {
        x -= 1.0;
    }
    if keyboard.any_pressed(RIGHT) {
        x += 1.0;
    }
    x
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.axis_x = horizontal_axis(&keyboard);
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP);
    input.jump_held = keyboard.any_pressed(JUMP);
    input.dash_just_pressed = keyboard.any_just_pressed(DASH);
}
