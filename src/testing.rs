//! Static box world standing in for the physics ray query in tests.

use std::sync::Mutex;

use bevy::prelude::*;

use crate::collisions::{RayCaster, RayContact};

/// An axis-aligned solid, optionally reporting a fixed surface normal to fake slopes.
#[derive(Debug, Clone, Copy)]
pub struct Solid {
    pub rect: Rect,
    pub normal: Option<Vec2>,
}

/// Also usable as a resource so scheduled systems can scan against it.
#[derive(Resource, Debug, Default)]
pub struct BoxWorld {
    pub solids: Vec<Solid>,
    pub casts: Mutex<Vec<(Vec2, Dir2)>>,
}

impl BoxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_box(mut self, rect: Rect) -> Self {
        self.solids.push(Solid { rect, normal: None });
        self
    }

    pub fn with_surface(mut self, rect: Rect, normal: Vec2) -> Self {
        self.solids.push(Solid {
            rect,
            normal: Some(normal),
        });
        self
    }

    pub fn cast_directions(&self) -> Vec<Dir2> {
        self.casts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, dir)| *dir)
            .collect()
    }
}

impl RayCaster for BoxWorld {
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayContact> {
        self.casts.lock().unwrap().push((origin, direction));

        self.solids
            .iter()
            .filter_map(|solid| {
                ray_rect(origin, *direction, max_distance, solid.rect)
                    .map(|(distance, face)| (distance, solid.normal.unwrap_or(face)))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, normal)| RayContact { normal, distance })
    }
}

/// Slab test. Returns the entry distance and the normal of the face entered.
fn ray_rect(origin: Vec2, direction: Vec2, max_distance: f32, rect: Rect) -> Option<(f32, Vec2)> {
    let mut t_min = 0.0_f32;
    let mut t_max = max_distance;
    let mut normal = Vec2::ZERO;

    for (o, d, lo, hi, axis) in [
        (origin.x, direction.x, rect.min.x, rect.max.x, Vec2::X),
        (origin.y, direction.y, rect.min.y, rect.max.y, Vec2::Y),
    ] {
        if d.abs() < f32::EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let mut t0 = (lo - o) / d;
        let mut t1 = (hi - o) / d;
        let mut face = -axis;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
            face = axis;
        }

        if t0 > t_min {
            t_min = t0;
            normal = face;
        }
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    Some((t_min, normal))
}
