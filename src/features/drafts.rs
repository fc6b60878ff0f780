//! Form draft cache
//!
//! One JSON file holding a map of form id to the last unsubmitted contents
//! of that form. Every write persists the whole map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    path: Option<PathBuf>,
    drafts: BTreeMap<String, serde_json::Value>,
}

impl DraftStore {
    /// Default location in the user data directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("in", "evready", "EVready")
            .map(|dirs| dirs.data_dir().join("drafts.json"))
    }

    /// Open the default store; falls back to an in-memory store
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                tracing::warn!("No data directory, drafts will not persist");
                Self::default()
            }
        }
    }

    /// Open a store at `path`; a missing or unreadable file starts empty
    pub fn open(path: PathBuf) -> Self {
        let drafts = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable draft file {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: Some(path),
            drafts,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Draft stored under `key`, if it still deserializes as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.drafts.get(key)?;
        serde_json::from_value(value.clone())
            .inspect_err(|e| tracing::debug!("Draft {} no longer matches its form: {}", key, e))
            .ok()
    }

    pub fn set<T: Serialize>(&mut self, key: &str, draft: &T) -> Result<()> {
        let value = serde_json::to_value(draft).context("Failed to serialize draft")?;
        if self.drafts.get(key) == Some(&value) {
            return Ok(());
        }
        self.drafts.insert(key.to_string(), value);
        self.persist()
    }

    pub fn clear(&mut self, key: &str) -> Result<()> {
        if self.drafts.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let content = serde_json::to_string_pretty(&self.drafts)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::{DRAFT_KEY, RegistrationForm};

    fn temp_store(name: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("evready-drafts-test-{}", std::process::id()))
            .join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    fn sample() -> RegistrationForm {
        RegistrationForm {
            name: "Arjun".into(),
            email: "arjun@".into(),
            mobile: "98450".into(),
            coupon_id: String::new(),
        }
    }

    #[test]
    fn round_trip_through_file() {
        let path = temp_store("round_trip.json");
        let mut store = DraftStore::open(path.clone());
        store.set(DRAFT_KEY, &sample()).unwrap();

        let reopened = DraftStore::open(path.clone());
        assert_eq!(reopened.get::<RegistrationForm>(DRAFT_KEY), Some(sample()));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clear_removes_draft_from_disk() {
        let path = temp_store("clear.json");
        let mut store = DraftStore::open(path.clone());
        store.set(DRAFT_KEY, &sample()).unwrap();
        store.set("other-form", &"keep").unwrap();
        store.clear(DRAFT_KEY).unwrap();

        let reopened = DraftStore::open(path.clone());
        assert_eq!(reopened.get::<RegistrationForm>(DRAFT_KEY), None);
        assert_eq!(reopened.get::<String>("other-form").as_deref(), Some("keep"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_and_corrupt_files_start_empty() {
        let missing = DraftStore::open(temp_store("missing.json"));
        assert_eq!(missing.get::<RegistrationForm>(DRAFT_KEY), None);

        let path = temp_store("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[1, 2").unwrap();
        let corrupt = DraftStore::open(path.clone());
        assert_eq!(corrupt.get::<RegistrationForm>(DRAFT_KEY), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn in_memory_store_never_touches_disk() {
        let mut store = DraftStore::default();
        store.set(DRAFT_KEY, &sample()).unwrap();
        assert!(store.path().is_none());
        assert_eq!(store.get::<RegistrationForm>(DRAFT_KEY), Some(sample()));
    }
}
