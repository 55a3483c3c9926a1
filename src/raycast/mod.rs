//! Raycast domain: skin-shrunk bounds and the ray grid cast from them.

mod grid;

pub use grid::{
    DISTANCE_BETWEEN_RAYS, RaySpacing, RaycastController, RaycastOrigins, SKIN_WIDTH,
    bounding_frame, ray_count,
};
