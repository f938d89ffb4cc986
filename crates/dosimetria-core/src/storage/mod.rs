mod config;
pub mod repository;
pub mod session_db;

pub use config::{Config, DisplayConfig, StorageConfig, UserConfig};
pub use repository::{
    InMemorySessionRepository, SentencingSession, SentencingSessionInput, SessionRepository,
};
pub use session_db::SessionDb;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/dosimetria[-dev]/`.
///
/// Set DOSIMETRIA_ENV=dev to use the development data directory, or
/// DOSIMETRIA_DATA_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("DOSIMETRIA_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("DOSIMETRIA_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("dosimetria-dev")
            } else {
                base_dir.join("dosimetria")
            }
        }
    };

    ensure_dir(dir)
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
