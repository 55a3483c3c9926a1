//! Collisions domain: tests for directional sweeps and slope filtering.

use bevy::prelude::*;

use super::{ContactState, ScanSettings, is_walkable, normal_angle, scan_contacts};
use crate::raycast::{RaycastController, SKIN_WIDTH};
use crate::testing::BoxWorld;

/// 1x2 frame once the skin is removed: 8 horizontal rays, 4 vertical rays.
fn character() -> RaycastController {
    RaycastController::from_bounds(Rect::new(0.0, 0.0, 1.06, 2.06))
}

fn floor() -> Rect {
    Rect::new(-10.0, -1.0, 10.0, 0.0)
}

fn slope_normal(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(-radians.sin(), radians.cos())
}

// -----------------------------------------------------------------------------
// Slope classification tests
// -----------------------------------------------------------------------------

#[test]
fn test_normal_angle_reference_points() {
    assert!(normal_angle(Vec2::Y).abs() < 1e-3);
    assert!((normal_angle(Vec2::NEG_X) - 90.0).abs() < 1e-3);
    assert!((normal_angle(Vec2::X) + 90.0).abs() < 1e-3);
    assert!((normal_angle(slope_normal(30.0)) - 30.0).abs() < 1e-3);
}

#[test]
fn test_walkable_boundary_is_exclusive() {
    assert!(is_walkable(Vec2::Y, 70.0));
    assert!(is_walkable(slope_normal(69.9), 70.0));
    assert!(!is_walkable(slope_normal(70.0), 70.0));
    assert!(!is_walkable(slope_normal(80.0), 70.0));
}

#[test]
fn test_zero_max_slope_rejects_flat_ground() {
    assert!(!is_walkable(Vec2::Y, 0.0));
}

#[test]
fn test_right_leaning_normal_is_not_walkable() {
    // Normals leaning towards +X produce a negative normal angle.
    let normal = Vec2::new(0.2, 0.98).normalize();
    assert!(normal_angle(normal) < 0.0);
    assert!(!is_walkable(normal, 70.0));
}

// -----------------------------------------------------------------------------
// Scan tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_geometry_means_no_contact() {
    let report = scan_contacts(&BoxWorld::new(), &character(), ScanSettings::default());

    assert_eq!(report.contacts, ContactState::default());
    assert!(!report.refresh_air_jumps);
}

#[test]
fn test_flat_floor_sets_below_and_refreshes_jumps() {
    let world = BoxWorld::new().with_box(floor());
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    assert!(report.contacts.below);
    assert!(!report.contacts.above);
    assert!(!report.contacts.left);
    assert!(!report.contacts.right);
    assert!(report.refresh_air_jumps);
}

#[test]
fn test_floor_beyond_skin_is_ignored() {
    let world = BoxWorld::new().with_box(Rect::new(-10.0, -1.0, 10.0, -0.1));
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    assert!(!report.contacts.below);
}

#[test]
fn test_ground_distance_is_the_closest_walkable_hit() {
    let world = BoxWorld::new()
        .with_box(Rect::new(-10.0, -1.0, 10.0, -0.02))
        .with_box(Rect::new(0.9, -1.0, 1.1, 0.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    let distance = report.ground_distance.unwrap();
    assert!((distance - SKIN_WIDTH).abs() < 1e-4);

    let report = scan_contacts(&BoxWorld::new(), &character(), ScanSettings::default());
    assert_eq!(report.ground_distance, None);

    // Steep hits are not ground and do not report a distance.
    let world = BoxWorld::new().with_surface(floor(), slope_normal(75.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert_eq!(report.ground_distance, None);
}

#[test]
fn test_steep_floor_is_not_ground() {
    let world = BoxWorld::new().with_surface(floor(), slope_normal(70.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(!report.contacts.below);
    assert!(!report.refresh_air_jumps);

    let world = BoxWorld::new().with_surface(floor(), slope_normal(69.9));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(report.contacts.below);
}

#[test]
fn test_ceiling_sets_above_regardless_of_normal() {
    let world = BoxWorld::new().with_surface(Rect::new(-10.0, 2.06, 10.0, 3.0), Vec2::X);
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    assert!(report.contacts.above);
    assert!(!report.contacts.below);
    assert!(!report.refresh_air_jumps);
}

#[test]
fn test_walls_set_left_and_right() {
    let world = BoxWorld::new().with_box(Rect::new(-1.0, -10.0, 0.0, 10.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(report.contacts.left);
    assert!(!report.contacts.right);

    let world = BoxWorld::new().with_box(Rect::new(1.06, -10.0, 2.0, 10.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(!report.contacts.left);
    assert!(report.contacts.right);
    assert!(!report.contacts.below);
    assert!(!report.refresh_air_jumps);
}

#[test]
fn test_last_wall_hit_wins_in_a_tight_shaft() {
    // Walls on both sides: the +X sweep runs second and clears the left contact.
    let world = BoxWorld::new()
        .with_box(Rect::new(-1.0, -10.0, 0.0, 10.0))
        .with_box(Rect::new(1.06, -10.0, 2.0, 10.0));
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    assert!(!report.contacts.left);
    assert!(report.contacts.right);
    assert_eq!(report.contacts.wall_direction(), 1.0);
}

#[test]
fn test_walls_refresh_jumps_when_enabled() {
    let world = BoxWorld::new().with_box(Rect::new(1.06, -10.0, 2.0, 10.0));
    let settings = ScanSettings {
        walls_refresh_air_jumps: true,
        ..default()
    };
    let report = scan_contacts(&world, &character(), settings);

    assert!(report.contacts.right);
    assert!(report.refresh_air_jumps);
}

#[test]
fn test_only_top_ray_touching_still_counts() {
    // A ledge that only the highest left ray reaches.
    let world = BoxWorld::new().with_box(Rect::new(-1.0, 1.9, 0.0, 2.1));
    let report = scan_contacts(&world, &character(), ScanSettings::default());

    assert!(report.contacts.left);
}

#[test]
fn test_sweeps_run_in_fixed_order_without_early_exit() {
    let world = BoxWorld::new()
        .with_box(floor())
        .with_box(Rect::new(-1.0, -10.0, 0.0, 10.0));
    let grid = character();
    scan_contacts(&world, &grid, ScanSettings::default());

    let mut expected = Vec::new();
    expected.extend(std::iter::repeat_n(Dir2::NEG_X, grid.spacing.horizontal_ray_count));
    expected.extend(std::iter::repeat_n(Dir2::X, grid.spacing.horizontal_ray_count));
    expected.extend(std::iter::repeat_n(Dir2::NEG_Y, grid.spacing.vertical_ray_count));
    expected.extend(std::iter::repeat_n(Dir2::Y, grid.spacing.vertical_ray_count));

    assert_eq!(world.cast_directions(), expected);
    assert_eq!(world.cast_directions().len(), 24);
}

#[test]
fn test_rays_are_skin_length() {
    // A floor exactly one skin width below the true collider bottom is still reached.
    let world = BoxWorld::new().with_box(Rect::new(-10.0, -1.0, 10.0, -0.029));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(report.contacts.below);

    let world = BoxWorld::new().with_box(Rect::new(-10.0, -1.0, 10.0, -0.031));
    let report = scan_contacts(&world, &character(), ScanSettings::default());
    assert!(!report.contacts.below);
}
