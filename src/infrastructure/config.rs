//! Settings file management.
//!
//! Handles loading and creating the TOML settings file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, AppSettings, Result};

/// Default settings file content.
const DEFAULT_CONFIG: &str = r#"# App Composer Configuration
# Auto-generated - edit as needed

[paths]
# Custom data directory (optional, defaults to ~/.app-composer)
# data_dir = "/custom/path"

[exports]
# Number of exports shown by `list --recent` (default: 5)
recent_limit = 5

# Where downloads are written (optional, defaults to the working directory)
# download_dir = "/path/for/downloads"
"#;

/// Load settings from the default file, or defaults if it is missing.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppSettings> {
    let config_path = config_file_path();

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        Ok(AppSettings::default())
    }
}

/// Load settings from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppSettings> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Create the default settings file at `path` if it doesn't exist.
///
/// Returns whether a file was written.
///
/// # Errors
/// Returns error if file cannot be created.
pub fn ensure_config_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| AppError::io("Failed to create default config", e))?;

    tracing::info!(path = %path.display(), "Created default configuration");

    Ok(true)
}

/// Get the path to the default settings file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    AppSettings::default_data_dir().join("config.toml")
}
