//! Loader for the controller tuning RON file.

use std::fs;
use std::path::Path;

use ron::Options;

use super::data::ControllerTuning;
use super::validation::validate_tuning;

/// Error type for tuning load failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("invalid tuning field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. Missing fields take their defaults.
pub fn parse_tuning(contents: &str, file: &str) -> Result<ControllerTuning, ConfigError> {
    let tuning: ControllerTuning =
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

    validate_tuning(&tuning)?;
    Ok(tuning)
}

/// Load and validate tuning from a RON file.
pub fn load_tuning(path: &Path) -> Result<ControllerTuning, ConfigError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: file.clone(),
        source,
    })?;

    parse_tuning(&contents, &file)
}
