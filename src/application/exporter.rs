//! Export manager.
//!
//! Stamps configurations into immutable export records, appends them to the
//! history and renders them as downloadable files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Configuration, ExportRecord, PersistedState, Result};
use crate::infrastructure::PersistenceStore;

use super::identity::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::naming::slug;

/// Schema version stamped on every record.
pub const EXPORT_VERSION: &str = "1.0.0";
/// Producer name stamped on every record.
pub const GENERATOR: &str = "Infinite App Composer";

/// Result of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The record was appended and persisted.
    Exported(ExportRecord),
    /// The configuration has no app name; history is unchanged.
    NothingToExport,
}

/// Appends configuration snapshots to the export history.
pub struct ExportManager<I = UuidGenerator, C = SystemClock> {
    ids: I,
    clock: C,
}

impl ExportManager {
    /// Manager using random UUIDs and the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_sources(UuidGenerator, SystemClock)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdGenerator, C: Clock> ExportManager<I, C> {
    /// Manager with explicit identifier and time sources.
    pub const fn with_sources(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Export `config` into the history held by `store`.
    ///
    /// `createdAt` never precedes the previous record's timestamp.
    ///
    /// # Errors
    /// Returns error if the updated history cannot be persisted.
    pub fn export_config(
        &mut self,
        store: &mut PersistenceStore,
        config: &Configuration,
    ) -> Result<ExportOutcome> {
        if !config.is_exportable() {
            tracing::info!("Nothing to export: app name is empty");
            return Ok(ExportOutcome::NothingToExport);
        }

        let mut next = store.state().clone();
        let floor = next.exports.last().map_or(i64::MIN, |r| r.created_at);

        let record = ExportRecord {
            id: self.ids.next_id(),
            config: config.clone(),
            created_at: self.clock.now_millis().max(floor),
            version: EXPORT_VERSION.to_string(),
            generator: GENERATOR.to_string(),
        };

        next.exports.push(record.clone());
        store.save(next)?;

        tracing::info!(
            id = %record.id,
            app_name = %record.config.app_name,
            created_at = record.created_at,
            "Exported configuration"
        );

        Ok(ExportOutcome::Exported(record))
    }

    /// Export the stored draft. No draft means nothing to export.
    ///
    /// # Errors
    /// Returns error if the updated history cannot be persisted.
    pub fn export_draft(&mut self, store: &mut PersistenceStore) -> Result<ExportOutcome> {
        match store.state().config.clone() {
            Some(config) => self.export_config(store, &config),
            None => {
                tracing::info!("Nothing to export: no draft saved");
                Ok(ExportOutcome::NothingToExport)
            }
        }
    }

    /// Store `config` as the draft and export it in one step.
    ///
    /// # Errors
    /// Returns error if either write fails.
    pub fn generate(
        &mut self,
        store: &mut PersistenceStore,
        config: Configuration,
    ) -> Result<ExportOutcome> {
        store.save_draft(config.clone())?;
        self.export_config(store, &config)
    }
}

/// Exports in storage order (oldest first).
#[must_use]
pub fn list_exports(state: &PersistedState) -> &[ExportRecord] {
    &state.exports
}

/// Full history, most recent first.
#[must_use]
pub fn history(state: &PersistedState) -> Vec<&ExportRecord> {
    list_exports(state).iter().rev().collect()
}

/// The last `limit` exports, most recent first.
#[must_use]
pub fn recent_exports(state: &PersistedState, limit: usize) -> Vec<&ExportRecord> {
    list_exports(state).iter().rev().take(limit).collect()
}

/// Find an export by exact id.
#[must_use]
pub fn find_export<'a>(state: &'a PersistedState, id: &str) -> Option<&'a ExportRecord> {
    list_exports(state).iter().find(|r| r.id == id)
}

/// Download file name for a record: `<slug>-config.json`.
#[must_use]
pub fn export_file_name(record: &ExportRecord) -> String {
    format!("{}-config.json", slug(&record.config.app_name))
}

/// Pretty JSON body of a download file.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_export(record: &ExportRecord) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(AppError::json_parse)
}

/// Write the export with `id` into `dir` and return the file path.
///
/// # Errors
/// Returns `ExportNotFound` for an unknown id, or an IO error if the file
/// cannot be written.
pub fn download_export(state: &PersistedState, id: &str, dir: &Path) -> Result<PathBuf> {
    let record = find_export(state, id).ok_or_else(|| AppError::ExportNotFound { id: id.into() })?;

    fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("Failed to create directory {}", dir.display()), e))?;

    let path = dir.join(export_file_name(record));
    fs::write(&path, render_export(record)?)
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

    tracing::info!(id = %record.id, path = %path.display(), "Downloaded export");

    Ok(path)
}
