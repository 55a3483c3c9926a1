//! Raycast-driven 2D kinematic character controller.
//!
//! A character's collider bounds are shrunk by a skin width and covered with a
//! grid of short rays. Each step the rays are swept along `-X, +X, -Y, +Y` to
//! find which sides are blocked, floors steeper than the configured slope are
//! filtered out, and the resulting contact flags drive wall sliding, wall
//! jumps and an aerial jump budget.
//!
//! Add [`movement::KinematicControllerPlugin`] and spawn characters with a
//! [`movement::MovementController`], a collider and [`avian2d`] collision
//! layers. Systems that read contacts belong in
//! [`movement::ControllerSet::Resolve`].

pub mod collisions;
pub mod config;
pub mod movement;
pub mod raycast;

#[cfg(test)]
mod testing;
