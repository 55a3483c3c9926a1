//! Movement domain: per-step contact sensing systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collisions::{RayCaster, ScanReport, SpatialRayCaster};
use crate::config::MovementTuning;
use crate::movement::MovementController;
use crate::raycast::RaycastController;

pub(crate) fn reset_contacts(mut query: Query<&mut MovementController>) {
    for mut controller in &mut query {
        controller.reset_contacts();
    }
}

pub(crate) fn update_raycast_origins(
    mut query: Query<(Entity, &ColliderAabb, &mut RaycastController)>,
) {
    for (entity, aabb, mut grid) in &mut query {
        let bounds = Rect::from_corners(aabb.min, aabb.max);

        if grid.needs_respacing(bounds) {
            grid.calculate_ray_spacing(bounds);
            debug!(
                "Ray spacing for {:?}: {} horizontal x {:.3}, {} vertical x {:.3}",
                entity,
                grid.spacing.horizontal_ray_count,
                grid.spacing.horizontal_ray_spacing,
                grid.spacing.vertical_ray_count,
                grid.spacing.vertical_ray_spacing
            );
        }

        grid.update_raycast_origins(bounds);
    }
}

pub(crate) fn update_collisions(
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &CollisionLayers,
        &RaycastController,
        &MovementTuning,
        &mut MovementController,
    )>,
) {
    for (entity, layers, grid, tuning, mut controller) in &mut query {
        let caster = SpatialRayCaster::for_character(&spatial_query, entity, layers);
        sense_contacts(entity, &caster, grid, tuning, &mut controller);
    }
}

/// Scan one character and log contact transitions against the previous step.
pub(crate) fn sense_contacts(
    entity: Entity,
    caster: &impl RayCaster,
    grid: &RaycastController,
    tuning: &MovementTuning,
    controller: &mut MovementController,
) -> ScanReport {
    let report = controller.update_collisions(caster, grid, tuning);

    let was = controller.previous_contacts();
    let now = controller.contacts();

    if now.below && !was.below {
        debug!(
            "Landed: {:?}, ground_distance={:?}, aerial_jumps={}",
            entity,
            report.ground_distance,
            controller.aerial_jumps()
        );
    } else if !now.below && was.below {
        debug!("Left ground: {:?}", entity);
    }

    if now.on_wall() && !was.on_wall() {
        debug!(
            "Touched wall: {:?}, left={}, right={}",
            entity, now.left, now.right
        );
    }

    report
}

/// A resting character still needs fresh raycasts every step.
pub(crate) fn wake_sleeping_bodies(
    mut commands: Commands,
    query: Query<Entity, (With<MovementController>, With<Sleeping>)>,
) {
    for entity in &query {
        debug!("Waking {:?}", entity);
        commands.entity(entity).remove::<Sleeping>();
    }
}
