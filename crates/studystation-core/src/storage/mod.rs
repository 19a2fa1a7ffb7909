mod config;
pub mod store;

pub use config::Config;
pub use store::Store;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/studystation[-dev]/` based on STUDYSTATION_ENV.
///
/// Set STUDYSTATION_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYSTATION_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studystation-dev")
    } else {
        base_dir.join("studystation")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
