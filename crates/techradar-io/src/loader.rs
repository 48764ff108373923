//! JSON loading and schema validation for radar data

use std::path::Path;
use techradar_domain::{validate_radar_data, DomainError, RadarData};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while loading radar data
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Radar data file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read radar data file '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid radar data JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid radar data: {0}")]
    InvalidSchema(#[from] DomainError),
}

/// Result type for loading operations
pub type IoResult<T> = Result<T, IoError>;

/// Load and validate radar data from a JSON file
pub fn load_radar_data(path: impl AsRef<Path>) -> IoResult<RadarData> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading radar data");

    if !path.exists() {
        error!(path = %path.display(), "radar data file not found");
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path).map_err(|err| IoError::ReadFailed {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    let data = parse_radar_data(&contents)?;
    info!(
        path = %path.display(),
        editions = data.editions.len(),
        "radar data loaded"
    );
    Ok(data)
}

/// Parse and validate radar data from a JSON string
///
/// Structural problems (unknown enum strings, malformed timestamps,
/// missing fields) surface as `InvalidJson`; cross-field invariant
/// violations as `InvalidSchema`. Both are fatal to the caller.
pub fn parse_radar_data(json: &str) -> IoResult<RadarData> {
    let data: RadarData = serde_json::from_str(json)?;
    validate_radar_data(&data)?;
    Ok(data)
}
