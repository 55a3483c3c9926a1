//! Movement domain: physics layers and the per-character controller state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collisions::{ContactState, RayCaster, ScanReport, scan_contacts};
use crate::config::MovementTuning;
use crate::movement::phase::{MovementPhase, classify};
use crate::movement::resolver::{resolve_jump, wall_jump, wall_slide};
use crate::raycast::RaycastController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

/// Contact flags, aerial jump budget and wall-stick timer of one character.
///
/// Contacts are rebuilt every step by [`reset_contacts`](Self::reset_contacts)
/// followed by [`update_collisions`](Self::update_collisions); only the budget
/// and the timer carry over between steps.
///
/// A controller built through `Default` (for example as a required component)
/// has no stick timer yet and takes `wall_stick_time` from the entity's own
/// tuning the first time it is read.
#[derive(Component, Debug, Clone, Default)]
#[require(RaycastController, MovementTuning)]
pub struct MovementController {
    contacts: ContactState,
    previous_contacts: ContactState,
    aerial_jumps: u32,
    time_to_wall_unstick: Option<f32>,
    /// Elapsed seconds at the last dash. Not read here; the dash belongs to the caller.
    pub last_dash: Option<f32>,
}

impl MovementController {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            contacts: ContactState::default(),
            previous_contacts: ContactState::default(),
            aerial_jumps: 0,
            time_to_wall_unstick: Some(tuning.wall_stick_time),
            last_dash: None,
        }
    }

    pub fn contacts(&self) -> ContactState {
        self.contacts
    }

    /// Contacts as they were before the last reset.
    pub fn previous_contacts(&self) -> ContactState {
        self.previous_contacts
    }

    pub fn aerial_jumps(&self) -> u32 {
        self.aerial_jumps
    }

    pub fn time_to_wall_unstick(&self, tuning: &MovementTuning) -> f32 {
        self.time_to_wall_unstick.unwrap_or(tuning.wall_stick_time)
    }

    /// Clear all four contact flags. Must run before the scan of the same step.
    pub fn reset_contacts(&mut self) {
        self.previous_contacts = self.contacts;
        self.contacts.reset();
    }

    /// Fold a scan into this controller: hits set flags, a refresh clears the budget.
    pub fn apply_scan(&mut self, report: ScanReport) {
        self.contacts.above |= report.contacts.above;
        self.contacts.below |= report.contacts.below;
        self.contacts.left |= report.contacts.left;
        self.contacts.right |= report.contacts.right;

        if report.refresh_air_jumps {
            self.aerial_jumps = 0;
        }
    }

    /// Scan the grid with `caster` and apply the result.
    pub fn update_collisions(
        &mut self,
        caster: &impl RayCaster,
        grid: &RaycastController,
        tuning: &MovementTuning,
    ) -> ScanReport {
        let report = scan_contacts(caster, grid, tuning.scan_settings());
        self.apply_scan(report);
        report
    }

    pub fn handle_wall_sliding(
        &mut self,
        velocity: Vec2,
        input_x: f32,
        dt: f32,
        tuning: &MovementTuning,
    ) -> Vec2 {
        let slide = wall_slide(
            self.contacts,
            velocity,
            input_x,
            dt,
            self.time_to_wall_unstick(tuning),
            tuning,
        );
        self.time_to_wall_unstick = Some(slide.time_to_wall_unstick);
        slide.velocity
    }

    /// Jump velocity for this step, or zero when no jump is available.
    pub fn jump_velocity(&mut self, input_x: f32, tuning: &MovementTuning) -> Vec2 {
        let jump = resolve_jump(self.contacts, self.aerial_jumps, input_x, tuning);
        if let Some(kind) = jump.kind {
            debug!(
                "Jump granted: kind={:?}, velocity={}, aerial_jumps={}",
                kind, jump.velocity, jump.aerial_jumps
            );
        }
        self.aerial_jumps = jump.aerial_jumps;
        jump.velocity
    }

    /// Wall jump velocity alone, zero without a qualifying wall contact.
    pub fn wall_jump_velocity(&self, input_x: f32, tuning: &MovementTuning) -> Vec2 {
        wall_jump(self.contacts, input_x, tuning)
            .map(|(_, velocity)| velocity)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn phase(&self, tuning: &MovementTuning) -> MovementPhase {
        classify(
            self.contacts,
            self.aerial_jumps,
            self.time_to_wall_unstick(tuning),
            tuning,
        )
    }
}
