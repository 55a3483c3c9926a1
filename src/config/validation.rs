//! Sanity checks for movement tuning values.

use super::tuning::MovementTuning;

#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' = {} {}", self.field, self.value, self.reason)
    }
}

macro_rules! check {
    ($errors:expr, $field:literal, $value:expr, $ok:expr, $reason:literal) => {
        let value: f32 = $value;
        if !value.is_finite() {
            $errors.push(TuningValidationError {
                field: $field,
                value,
                reason: "is not finite",
            });
        } else if !$ok(value) {
            $errors.push(TuningValidationError {
                field: $field,
                value,
                reason: $reason,
            });
        }
    };
}

/// Returns every problem found, empty when the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;

    check!(errors, "movement_speed", tuning.movement_speed, non_negative, "must not be negative");
    check!(
        errors,
        "max_slope_angle",
        tuning.max_slope_angle,
        |v: f32| (0.0..=90.0).contains(&v),
        "must be within [0, 90] degrees"
    );
    check!(errors, "max_jump_force", tuning.max_jump_force, non_negative, "must not be negative");
    check!(
        errors,
        "min_jump_force",
        tuning.min_jump_force,
        |v: f32| v >= 0.0 && v <= tuning.max_jump_force,
        "must be within [0, max_jump_force]"
    );
    check!(
        errors,
        "wall_slide_speed_max",
        tuning.wall_slide_speed_max,
        non_negative,
        "must not be negative"
    );
    check!(errors, "wall_stick_time", tuning.wall_stick_time, non_negative, "must not be negative");
    check!(errors, "dash_force", tuning.dash_force, non_negative, "must not be negative");
    check!(errors, "dash_duration", tuning.dash_duration, non_negative, "must not be negative");
    check!(errors, "dash_cooldown", tuning.dash_cooldown, non_negative, "must not be negative");

    for (field, vector) in [
        ("wall_jump_climb", tuning.wall_jump_climb),
        ("wall_jump_off", tuning.wall_jump_off),
        ("wall_leap", tuning.wall_leap),
        ("wall_fall", tuning.wall_fall),
    ] {
        if !vector.is_finite() {
            errors.push(TuningValidationError {
                field,
                value: if vector.x.is_finite() { vector.y } else { vector.x },
                reason: "is not finite",
            });
        }
    }

    errors
}
