//! Content domain: data-driven controller tuning.

mod data;
mod loader;
mod validation;

use std::path::PathBuf;

use bevy::prelude::*;

pub use data::*;
pub use loader::{ConfigError, load_tuning, parse_tuning};
pub use validation::validate_tuning;

pub const DEFAULT_TUNING_PATH: &str = "assets/data/controller.ron";

/// Loads [`ControllerTuning`] when the app is built so it is available to
/// every startup system.
pub struct ContentPlugin {
    pub tuning_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: PathBuf::from(DEFAULT_TUNING_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_tuning(&self.tuning_path) {
            Ok(tuning) => {
                info!("Loaded controller tuning from {}", self.tuning_path.display());
                tuning
            }
            Err(e) => {
                warn!("{}; using default controller tuning", e);
                ControllerTuning::default()
            }
        };

        app.insert_resource(tuning);
    }
}

#[cfg(test)]
mod tests;
