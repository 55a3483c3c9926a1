//! Per-character movement tuning and its data-file representation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collisions::ScanSettings;

/// Wall slide policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum WallSlideVariant {
    /// Only slides while already falling: horizontal speed is zeroed and
    /// downward speed clamped to the slide maximum. Once unstuck, the
    /// incoming horizontal velocity passes through.
    #[default]
    Clamp,
    /// Always slides at the slide maximum and applies `wall_fall` once
    /// unstuck. Wall contact also refreshes air jumps.
    Fixed,
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct MovementTuning {
    pub movement_speed: f32,
    /// Degrees. Floors at or above this are not ground.
    pub max_slope_angle: f32,
    pub max_aerial_jumps: u32,
    pub max_jump_force: f32,
    /// Not read by the resolver; callers use it for variable jump height.
    pub min_jump_force: f32,
    pub wall_slide_speed_max: f32,
    /// Seconds the character stays stuck while pushing away from a wall.
    pub wall_stick_time: f32,
    pub wall_jump_climb: Vec2,
    pub wall_jump_off: Vec2,
    pub wall_leap: Vec2,
    /// Impulse applied when falling off a wall with [`WallSlideVariant::Fixed`].
    pub wall_fall: Vec2,
    /// Dash tunables are not read by the resolver; the dash itself is owned by the caller.
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub wall_slide_variant: WallSlideVariant,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_speed: 6.0,
            max_slope_angle: 70.0,
            max_aerial_jumps: 1,
            max_jump_force: 14.0,
            min_jump_force: 6.0,
            wall_slide_speed_max: 5.0,
            wall_stick_time: 0.25,
            wall_jump_climb: Vec2::new(7.5, 16.0),
            wall_jump_off: Vec2::new(8.5, 7.0),
            wall_leap: Vec2::new(18.0, 17.0),
            wall_fall: Vec2::new(4.0, -5.0),
            dash_force: 20.0,
            dash_duration: 0.15,
            dash_cooldown: 0.5,
            wall_slide_variant: WallSlideVariant::Clamp,
        }
    }
}

impl MovementTuning {
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            max_slope_angle: self.max_slope_angle,
            walls_refresh_air_jumps: self.wall_slide_variant == WallSlideVariant::Fixed,
        }
    }
}

/// On-disk form of [`MovementTuning`]. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuningDef {
    pub movement_speed: f32,
    pub max_slope_angle: f32,
    pub max_aerial_jumps: u32,
    pub max_jump_force: f32,
    pub min_jump_force: f32,
    pub wall_slide_speed_max: f32,
    pub wall_stick_time: f32,
    pub wall_jump_climb: [f32; 2],
    pub wall_jump_off: [f32; 2],
    pub wall_leap: [f32; 2],
    pub wall_fall: [f32; 2],
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    pub wall_slide_variant: WallSlideVariant,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        Self::from(&MovementTuning::default())
    }
}

impl From<&MovementTuning> for MovementTuningDef {
    fn from(tuning: &MovementTuning) -> Self {
        Self {
            movement_speed: tuning.movement_speed,
            max_slope_angle: tuning.max_slope_angle,
            max_aerial_jumps: tuning.max_aerial_jumps,
            max_jump_force: tuning.max_jump_force,
            min_jump_force: tuning.min_jump_force,
            wall_slide_speed_max: tuning.wall_slide_speed_max,
            wall_stick_time: tuning.wall_stick_time,
            wall_jump_climb: tuning.wall_jump_climb.to_array(),
            wall_jump_off: tuning.wall_jump_off.to_array(),
            wall_leap: tuning.wall_leap.to_array(),
            wall_fall: tuning.wall_fall.to_array(),
            dash_force: tuning.dash_force,
            dash_duration: tuning.dash_duration,
            dash_cooldown: tuning.dash_cooldown,
            wall_slide_variant: tuning.wall_slide_variant,
        }
    }
}

impl From<MovementTuningDef> for MovementTuning {
    fn from(def: MovementTuningDef) -> Self {
        Self {
            movement_speed: def.movement_speed,
            max_slope_angle: def.max_slope_angle,
            max_aerial_jumps: def.max_aerial_jumps,
            max_jump_force: def.max_jump_force,
            min_jump_force: def.min_jump_force,
            wall_slide_speed_max: def.wall_slide_speed_max,
            wall_stick_time: def.wall_stick_time,
            wall_jump_climb: Vec2::from_array(def.wall_jump_climb),
            wall_jump_off: Vec2::from_array(def.wall_jump_off),
            wall_leap: Vec2::from_array(def.wall_leap),
            wall_fall: Vec2::from_array(def.wall_fall),
            dash_force: def.dash_force,
            dash_duration: def.dash_duration,
            dash_cooldown: def.dash_cooldown,
            wall_slide_variant: def.wall_slide_variant,
        }
    }
}
