mod config;

pub use config::{Config, CountdownConfig, ProjectionConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// `NETWORTH_CONFIG_DIR` wins when set. Otherwise `~/.config/networth[-dev]/`
/// based on `NETWORTH_ENV` (set `NETWORTH_ENV=dev` for the development
/// directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("NETWORTH_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("NETWORTH_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("networth-dev")
            } else {
                base_dir.join("networth")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
