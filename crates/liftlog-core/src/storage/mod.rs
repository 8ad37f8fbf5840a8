mod config;
mod profile;

pub use config::Config;
pub use profile::{JsonProfileStore, MemoryProfileStore, ProfileStore};

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Returns `~/.config/liftlog[-dev]/` based on LIFTLOG_ENV.
///
/// Set LIFTLOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFTLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("liftlog-dev")
    } else {
        base_dir.join("liftlog")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
