//! Collisions domain: per-axis contact scanning over the ray grid.

mod caster;
mod contacts;
mod scanner;
#[cfg(test)]
mod tests;

pub use caster::{RayCaster, RayContact, SpatialRayCaster};
pub use contacts::ContactState;
pub use scanner::{ScanReport, ScanSettings, is_walkable, normal_angle, scan_contacts};
