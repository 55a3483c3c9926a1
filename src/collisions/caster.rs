//! Ray query seam between the scanner and the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

/// A single ray hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayContact {
    /// Surface normal at the hit point. Unit length, or zero when the ray
    /// started inside the collider.
    pub normal: Vec2,
    /// Distance travelled from the ray origin.
    pub distance: f32,
}

/// Anything that can answer "what does this ray hit first?".
pub trait RayCaster {
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayContact>;
}

/// [`RayCaster`] backed by avian's spatial query pipeline.
pub struct SpatialRayCaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialRayCaster<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, filter: SpatialQueryFilter) -> Self {
        Self {
            spatial_query,
            filter,
        }
    }

    /// Cast against whatever `layers` collides with, skipping the character itself.
    pub fn for_character(
        spatial_query: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        layers: &CollisionLayers,
    ) -> Self {
        let filter = SpatialQueryFilter::from_mask(layers.filters).with_excluded_entities([entity]);
        Self::new(spatial_query, filter)
    }
}

impl RayCaster for SpatialRayCaster<'_, '_, '_> {
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayContact> {
        // Solid casts report a hit at distance 0 when the origin is already inside a collider.
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| RayContact {
                normal: hit.normal,
                distance: hit.distance,
            })
    }
}
