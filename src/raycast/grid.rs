//! Bounding frame, ray origins and ray spacing for a character collider.

use bevy::prelude::*;

/// Inward clearance kept between the collider surface and every ray origin.
pub const SKIN_WIDTH: f32 = 0.03;

/// Target distance between two neighbouring rays along one side.
pub const DISTANCE_BETWEEN_RAYS: f32 = 0.25;

/// Shrink collider bounds by [`SKIN_WIDTH`] on every side.
///
/// Bounds smaller than two skin widths collapse onto their center instead of
/// inverting.
pub fn bounding_frame(bounds: Rect) -> Rect {
    let skin = Vec2::splat(SKIN_WIDTH);
    let min = bounds.min + skin;
    let max = bounds.max - skin;
    let center = bounds.center();

    Rect {
        min: Vec2::new(
            if min.x > max.x { center.x } else { min.x },
            if min.y > max.y { center.y } else { min.y },
        ),
        max: Vec2::new(
            if min.x > max.x { center.x } else { max.x },
            if min.y > max.y { center.y } else { max.y },
        ),
    }
}

/// Number of rays needed to cover `extent` at [`DISTANCE_BETWEEN_RAYS`], never fewer than two.
pub fn ray_count(extent: f32) -> usize {
    if !extent.is_finite() || extent <= 0.0 {
        return 2;
    }
    (extent / DISTANCE_BETWEEN_RAYS).round_ties_even().max(2.0) as usize
}

/// Corners of the bounding frame that the directional sweeps start from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RaycastOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl RaycastOrigins {
    pub fn from_frame(frame: Rect) -> Self {
        Self {
            top_left: Vec2::new(frame.min.x, frame.max.y),
            top_right: frame.max,
            bottom_left: frame.min,
            bottom_right: Vec2::new(frame.max.x, frame.min.y),
        }
    }
}

/// Ray counts per side and the distance between consecutive rays.
///
/// Horizontal rays are stacked along the frame height, vertical rays along
/// its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySpacing {
    pub horizontal_ray_count: usize,
    pub vertical_ray_count: usize,
    pub horizontal_ray_spacing: f32,
    pub vertical_ray_spacing: f32,
}

impl Default for RaySpacing {
    fn default() -> Self {
        Self {
            horizontal_ray_count: 2,
            vertical_ray_count: 2,
            horizontal_ray_spacing: 0.0,
            vertical_ray_spacing: 0.0,
        }
    }
}

impl RaySpacing {
    /// Spacing for an already shrunk frame of the given size.
    pub fn from_size(size: Vec2) -> Self {
        let horizontal_ray_count = ray_count(size.y);
        let vertical_ray_count = ray_count(size.x);

        Self {
            horizontal_ray_count,
            vertical_ray_count,
            horizontal_ray_spacing: size.y.max(0.0) / (horizontal_ray_count - 1) as f32,
            vertical_ray_spacing: size.x.max(0.0) / (vertical_ray_count - 1) as f32,
        }
    }
}

/// Ray grid of one character, derived from its collider bounds.
#[derive(Component, Debug, Clone, Default)]
pub struct RaycastController {
    pub origins: RaycastOrigins,
    pub spacing: RaySpacing,
    /// Collider size the current spacing was computed for.
    sized_for: Option<Vec2>,
}

impl RaycastController {
    /// Build a controller with origins and spacing already computed for `bounds`.
    pub fn from_bounds(bounds: Rect) -> Self {
        let mut controller = Self::default();
        controller.calculate_ray_spacing(bounds);
        controller.update_raycast_origins(bounds);
        controller
    }

    /// Recompute the four corners from the live collider bounds.
    pub fn update_raycast_origins(&mut self, bounds: Rect) {
        self.origins = RaycastOrigins::from_frame(bounding_frame(bounds));
    }

    /// Recompute ray counts and spacing. Only needed when the collider size changes.
    pub fn calculate_ray_spacing(&mut self, bounds: Rect) {
        self.spacing = RaySpacing::from_size(bounding_frame(bounds).size());
        self.sized_for = Some(bounds.size());
    }

    /// Whether `bounds` differs in size from the bounds the spacing was computed for.
    pub fn needs_respacing(&self, bounds: Rect) -> bool {
        match self.sized_for {
            Some(size) => !size.abs_diff_eq(bounds.size(), 1e-5),
            None => true,
        }
    }

    /// Origin of ray `index` for a horizontal sweep in `direction_x`.
    pub fn horizontal_ray_origin(&self, direction_x: f32, index: usize) -> Vec2 {
        let base = if direction_x < 0.0 {
            self.origins.bottom_left
        } else {
            self.origins.bottom_right
        };
        base + Vec2::Y * (index as f32 * self.spacing.horizontal_ray_spacing)
    }

    /// Origin of ray `index` for a vertical sweep in `direction_y`.
    pub fn vertical_ray_origin(&self, direction_y: f32, index: usize) -> Vec2 {
        let base = if direction_y < 0.0 {
            self.origins.bottom_left
        } else {
            self.origins.top_left
        };
        base + Vec2::X * (index as f32 * self.spacing.vertical_ray_spacing)
    }
}
