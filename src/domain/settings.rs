//! Tool settings.
//!
//! Where the local store lives and how export listings behave.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathConfig {
    /// Base data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Settings for export listings and downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Number of records shown by `list --recent`.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Directory downloads are written to when none is given.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            download_dir: None,
        }
    }
}

const fn default_recent_limit() -> usize {
    5
}

/// Complete tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Path configuration.
    #[serde(default)]
    pub paths: PathConfig,

    /// Export listing configuration.
    #[serde(default)]
    pub exports: ExportSettings,
}

impl AppSettings {
    /// Get the data directory, using default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".app-composer")
    }

    /// Get the storage database path.
    #[must_use]
    pub fn storage_db_path(&self) -> PathBuf {
        self.data_dir().join("storage.db")
    }

    /// Directory downloads land in, defaulting to the working directory.
    #[must_use]
    pub fn download_dir(&self) -> PathBuf {
        self.exports
            .download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
