//! Four directional sweeps over the ray grid, classified into a [`ContactState`].

use bevy::prelude::*;

use crate::collisions::{ContactState, RayCaster};
use crate::raycast::{RaycastController, SKIN_WIDTH};

/// Knobs the scanner reads from the character's tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    /// Steepest floor, in degrees, that still counts as ground. Exclusive.
    pub max_slope_angle: f32,
    /// Whether a wall hit refreshes the aerial jump budget like ground does.
    pub walls_refresh_air_jumps: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_slope_angle: 70.0,
            walls_refresh_air_jumps: false,
        }
    }
}

/// Outcome of one scan pass. The caller folds it into its own state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanReport {
    pub contacts: ContactState,
    pub refresh_air_jumps: bool,
    /// Shortest walkable hit along the downward sweep, measured from the inset ray origins.
    pub ground_distance: Option<f32>,
}

/// `90° - angle(normal, -X)`, in degrees.
///
/// 0 for a flat floor, positive when the normal leans left, negative when it
/// leans right.
pub fn normal_angle(normal: Vec2) -> f32 {
    let cos = normal.normalize_or_zero().dot(Vec2::NEG_X).clamp(-1.0, 1.0);
    90.0 - cos.acos().to_degrees()
}

/// `0 <= normal_angle(normal) < max_slope_angle`, evaluated in sine space.
///
/// `normal` is expected to be unit length (or zero for a hit from inside a
/// collider, which reads as flat ground). `max_slope_angle` is clamped to
/// `[0, 90]`.
pub fn is_walkable(normal: Vec2, max_slope_angle: f32) -> bool {
    let rise = -normal.x;
    rise >= 0.0 && rise < max_slope_angle.clamp(0.0, 90.0).to_radians().sin()
}

/// Sweep `-X, +X, -Y, +Y` in that order and report which sides are blocked.
///
/// Every ray is cast; there is no early exit on the first hit.
pub fn scan_contacts(
    caster: &impl RayCaster,
    grid: &RaycastController,
    settings: ScanSettings,
) -> ScanReport {
    let mut report = ScanReport::default();

    detect_horizontal_collisions(caster, grid, -1.0, settings, &mut report);
    detect_horizontal_collisions(caster, grid, 1.0, settings, &mut report);
    detect_vertical_collisions(caster, grid, -1.0, settings, &mut report);
    detect_vertical_collisions(caster, grid, 1.0, settings, &mut report);

    report
}

fn ray_length() -> f32 {
    2.0 * SKIN_WIDTH
}

fn detect_horizontal_collisions(
    caster: &impl RayCaster,
    grid: &RaycastController,
    direction_x: f32,
    settings: ScanSettings,
    report: &mut ScanReport,
) {
    let direction = if direction_x < 0.0 { Dir2::NEG_X } else { Dir2::X };

    for i in 0..grid.spacing.horizontal_ray_count {
        let origin = grid.horizontal_ray_origin(direction_x, i);

        if caster.cast_ray(origin, direction, ray_length()).is_some() {
            // Last hit wins: a +X hit clears a left contact from the -X sweep.
            report.contacts.left = direction_x < 0.0;
            report.contacts.right = direction_x > 0.0;

            if settings.walls_refresh_air_jumps {
                report.refresh_air_jumps = true;
            }
        }
    }
}

fn detect_vertical_collisions(
    caster: &impl RayCaster,
    grid: &RaycastController,
    direction_y: f32,
    settings: ScanSettings,
    report: &mut ScanReport,
) {
    let direction = if direction_y < 0.0 { Dir2::NEG_Y } else { Dir2::Y };

    for i in 0..grid.spacing.vertical_ray_count {
        let origin = grid.vertical_ray_origin(direction_y, i);

        let Some(hit) = caster.cast_ray(origin, direction, ray_length()) else {
            continue;
        };

        if direction_y > 0.0 {
            report.contacts.above = true;
        } else if is_walkable(hit.normal, settings.max_slope_angle) {
            report.contacts.below = true;
            report.refresh_air_jumps = true;
            report.ground_distance = Some(
                report
                    .ground_distance
                    .map_or(hit.distance, |closest| closest.min(hit.distance)),
            );
        }
    }
}
