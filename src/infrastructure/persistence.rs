//! Persistence of the draft configuration and the export history.
//!
//! Two keys in the local key-value store hold compact JSON text. The store
//! owns the in-memory copy of that state; `load`, `save` and `clear` are the
//! only ways to change it.

use crate::domain::{AppError, Configuration, ExportRecord, PersistedState, Result};

use super::LocalStorage;

/// Key holding the draft configuration.
pub const CONFIG_KEY: &str = "iac.config";
/// Key holding the export history.
pub const EXPORTS_KEY: &str = "iac.exports";

/// Owner of the persisted state.
pub struct PersistenceStore {
    storage: LocalStorage,
    state: PersistedState,
}

impl PersistenceStore {
    /// Wrap a storage backend and load its current contents.
    ///
    /// # Errors
    /// Returns error if the backend cannot be read.
    pub fn open(storage: LocalStorage) -> Result<Self> {
        let mut store = Self {
            storage,
            state: PersistedState::default(),
        };
        store.load()?;
        Ok(store)
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &PersistedState {
        &self.state
    }

    /// Reload both records from storage.
    ///
    /// Missing keys load as empty. Text that fails to parse is logged and
    /// treated the same way.
    ///
    /// # Errors
    /// Returns error if the backend cannot be read.
    pub fn load(&mut self) -> Result<&PersistedState> {
        let config = match self.storage.get(CONFIG_KEY)? {
            Some(text) => decode_draft(&text).unwrap_or_else(|e| {
                tracing::warn!(key = CONFIG_KEY, error = %e, "Discarding unreadable draft");
                None
            }),
            None => None,
        };

        let exports = match self.storage.get(EXPORTS_KEY)? {
            Some(text) => decode_exports(&text).unwrap_or_else(|e| {
                tracing::warn!(key = EXPORTS_KEY, error = %e, "Discarding unreadable export history");
                Vec::new()
            }),
            None => Vec::new(),
        };

        tracing::debug!(
            has_draft = config.is_some(),
            exports = exports.len(),
            "Loaded persisted state"
        );

        self.state = PersistedState { config, exports };
        Ok(&self.state)
    }

    /// Replace the state and write both records back.
    ///
    /// The two keys are written one after the other without a transaction.
    ///
    /// # Errors
    /// Returns error if serialization or either write fails.
    pub fn save(&mut self, state: PersistedState) -> Result<()> {
        let config_text = encode_draft(state.config.as_ref())?;
        let exports_text = serde_json::to_string(&state.exports).map_err(AppError::json_parse)?;

        self.storage.set(CONFIG_KEY, &config_text)?;
        self.storage.set(EXPORTS_KEY, &exports_text)?;

        tracing::info!(
            has_draft = state.config.is_some(),
            exports = state.exports.len(),
            "Saved state"
        );

        self.state = state;
        Ok(())
    }

    /// Store `config` as the draft, keeping the export history.
    ///
    /// # Errors
    /// Returns error if the state cannot be written.
    pub fn save_draft(&mut self, config: Configuration) -> Result<()> {
        let mut next = self.state.clone();
        next.config = Some(config);
        self.save(next)
    }

    /// Delete both records and reset to the empty state.
    ///
    /// # Errors
    /// Returns error if either key cannot be removed.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(CONFIG_KEY)?;
        self.storage.remove(EXPORTS_KEY)?;
        self.state = PersistedState::default();

        tracing::info!("Cleared local data");
        Ok(())
    }
}

/// Decode the draft; an empty record (or `null`) means no draft.
fn decode_draft(text: &str) -> Result<Option<Configuration>> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(AppError::json_parse)?;

    let is_empty = value.is_null() || value.as_object().is_some_and(serde_json::Map::is_empty);
    if is_empty {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(AppError::json_parse)
}

fn decode_exports(text: &str) -> Result<Vec<ExportRecord>> {
    serde_json::from_str(text).map_err(AppError::json_parse)
}

fn encode_draft(config: Option<&Configuration>) -> Result<String> {
    match config {
        Some(config) => serde_json::to_string(config).map_err(AppError::json_parse),
        None => Ok("{}".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Integrations, Theme};
    use tempfile::tempdir;

    fn config(name: &str) -> Configuration {
        Configuration {
            app_name: name.into(),
            goal: Some("crm-lite".into()),
            tagline: "Simple pipeline.".into(),
            theme: Theme::default(),
            integrations: Integrations::default(),
            features: vec!["forms".into(), "webhooks".into()],
        }
    }

    fn record(id: &str, created_at: i64) -> ExportRecord {
        ExportRecord {
            id: id.into(),
            config: config("Acme"),
            created_at,
            version: "1.0.0".into(),
            generator: "Infinite App Composer".into(),
        }
    }

    fn memory_store() -> PersistenceStore {
        PersistenceStore::open(LocalStorage::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_storage_loads_defaults() {
        let store = memory_store();
        assert_eq!(store.state(), &PersistedState::default());
    }

    #[test]
    fn test_save_writes_both_keys() {
        let mut store = memory_store();
        store
            .save(PersistedState {
                config: None,
                exports: Vec::new(),
            })
            .unwrap();

        assert_eq!(store.storage.get(CONFIG_KEY).unwrap().as_deref(), Some("{}"));
        assert_eq!(store.storage.get(EXPORTS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_then_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("storage.db");

        let state = PersistedState {
            config: Some(config("Trackr")),
            exports: vec![record("a", 1), record("b", 2)],
        };

        {
            let mut store = PersistenceStore::open(LocalStorage::open(&db_path).unwrap()).unwrap();
            store.save(state.clone()).unwrap();
        }

        let store = PersistenceStore::open(LocalStorage::open(&db_path).unwrap()).unwrap();
        assert_eq!(store.state(), &state);
    }

    #[test]
    fn test_save_after_load_is_byte_identical() {
        let mut store = memory_store();
        let mut draft = config("Acme");
        draft.goal = None;
        store
            .save(PersistedState {
                config: Some(draft),
                exports: vec![record("a", 10), record("b", 20)],
            })
            .unwrap();

        let config_before = store.storage.get(CONFIG_KEY).unwrap();
        let exports_before = store.storage.get(EXPORTS_KEY).unwrap();

        let loaded = store.load().unwrap().clone();
        store.save(loaded).unwrap();

        assert_eq!(store.storage.get(CONFIG_KEY).unwrap(), config_before);
        assert_eq!(store.storage.get(EXPORTS_KEY).unwrap(), exports_before);
    }

    #[test]
    fn test_save_draft_keeps_exports() {
        let mut store = memory_store();
        store
            .save(PersistedState {
                config: None,
                exports: vec![record("a", 1)],
            })
            .unwrap();

        store.save_draft(config("LeadBeam")).unwrap();

        assert_eq!(store.state().exports.len(), 1);
        assert_eq!(
            store.state().config.as_ref().map(|c| c.app_name.as_str()),
            Some("LeadBeam")
        );
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let mut store = memory_store();
        store
            .save(PersistedState {
                config: Some(config("Acme")),
                exports: vec![record("a", 1)],
            })
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.state(), &PersistedState::default());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, &PersistedState::default());
        assert_eq!(store.storage.get(CONFIG_KEY).unwrap(), None);
        assert_eq!(store.storage.get(EXPORTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_empty() {
        let storage = LocalStorage::open_in_memory().unwrap();
        storage.set(CONFIG_KEY, "{not json").unwrap();
        storage
            .set(
                EXPORTS_KEY,
                &serde_json::to_string(&vec![record("a", 1)]).unwrap(),
            )
            .unwrap();

        let store = PersistenceStore::open(storage).unwrap();
        assert!(store.state().config.is_none());
        assert_eq!(store.state().exports.len(), 1);
    }

    #[test]
    fn test_corrupt_exports_fall_back_to_empty() {
        let storage = LocalStorage::open_in_memory().unwrap();
        storage.set(EXPORTS_KEY, r#"{"not":"a list"}"#).unwrap();

        let store = PersistenceStore::open(storage).unwrap();
        assert!(store.state().exports.is_empty());
    }

    #[test]
    fn test_decode_draft_empty_record_and_null() {
        assert_eq!(decode_draft("{}").unwrap(), None);
        assert_eq!(decode_draft("null").unwrap(), None);
        assert!(decode_draft("[1,2]").is_err());
    }

    #[test]
    fn test_decode_draft_fills_missing_fields() {
        let draft = decode_draft(r#"{"appName":"Old"}"#).unwrap().unwrap();
        assert_eq!(draft.app_name, "Old");
        assert_eq!(draft.theme, Theme::default());
        assert!(draft.features.is_empty());
    }
}
