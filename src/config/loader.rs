//! Loader for the RON movement tuning file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::tuning::{MovementTuning, MovementTuningDef};
use super::validation::validate_tuning;

/// File name of the movement tuning inside the data directory.
pub const MOVEMENT_TUNING_FILE: &str = "movement.ron";

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `file` is only used for error messages.
pub fn parse_tuning(contents: &str, file: &str) -> Result<MovementTuning, TuningLoadError> {
    let def: MovementTuningDef = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(def.into())
}

/// Load tuning from a RON file.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name)
}

/// Load tuning from `data_dir`, falling back to defaults on any load error.
/// Validation problems are logged but do not reject the file.
pub fn load_tuning_or_default(data_dir: &Path) -> MovementTuning {
    let path = data_dir.join(MOVEMENT_TUNING_FILE);

    let tuning = match load_tuning(&path) {
        Ok(tuning) => {
            info!("Loaded movement tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            MovementTuning::default()
        }
    };

    for error in validate_tuning(&tuning) {
        warn!("Movement tuning: {}", error);
    }

    tuning
}
