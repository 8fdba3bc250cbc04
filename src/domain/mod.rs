//! Domain layer - core types and errors.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (DB, IO, etc.).

pub mod error;
pub mod models;
pub mod settings;

pub use error::{AppError, Result};
pub use models::{
    Configuration, ExportRecord, Integrations, PersistedState, RawInput, TemplateDefaults, Theme,
};
pub use settings::AppSettings;
