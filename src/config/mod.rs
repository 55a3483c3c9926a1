//! Config domain: movement tuning, its RON loader, and validation.

mod loader;
#[cfg(test)]
mod tests;
mod tuning;
mod validation;

pub use loader::{
    MOVEMENT_TUNING_FILE, TuningLoadError, load_tuning, load_tuning_or_default, parse_tuning,
};
pub use tuning::{MovementTuning, MovementTuningDef, WallSlideVariant};
pub use validation::{TuningValidationError, validate_tuning};
