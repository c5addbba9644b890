//! Persisted vault settings: lock flag, vault PIN hash and device key.
//!
//! The device key always exists once settings are loaded, so the vault
//! can be encrypted even while no PIN is set.  Loading never blocks the
//! user: a corrupt file falls back to an in-memory default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::format::write_atomic;
use crate::crypto::keys::generate_device_key;
use crate::errors::{Result, VaultNoteError};

/// The settings record stored in `vault_settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSettings {
    /// True while a vault PIN is the active secret.
    pub vault_locked: bool,

    /// SHA-256 hex of the vault PIN; present iff `vault_locked`.
    pub vault_pin_hash: Option<String>,

    /// Base64 of 32 random bytes.
    pub device_key: String,
}

impl VaultSettings {
    /// Unlocked settings with a fresh device key.
    pub fn new_default() -> Self {
        Self {
            vault_locked: false,
            vault_pin_hash: None,
            device_key: generate_device_key(),
        }
    }
}

/// Where the settings returned by [`SettingsStore::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// No file existed; defaults were created and persisted.
    Created,
    /// Read from disk as-is.
    Loaded,
    /// Read from disk and repaired (e.g. a missing device key was added).
    Repaired,
    /// The file was unreadable; unpersisted defaults are in use.
    Reset,
}

/// Settings plus how they were obtained.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: VaultSettings,
    pub origin: SettingsOrigin,
}

/// Lenient on-disk shape: every field may be missing.
#[derive(Debug, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    vault_locked: bool,
    #[serde(default)]
    vault_pin_hash: Option<String>,
    #[serde(default)]
    device_key: Option<String>,
}

/// Reads and writes the settings file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, creating or repairing them as needed.
    pub fn load(&self) -> LoadedSettings {
        if !self.path.exists() {
            let settings = VaultSettings::new_default();
            if let Err(e) = self.save(&settings) {
                tracing::warn!(path = %self.path.display(), error = %e, "could not persist new settings");
            }
            tracing::debug!(path = %self.path.display(), "created default settings");
            return LoadedSettings {
                settings,
                origin: SettingsOrigin::Created,
            };
        }

        match self.read_stored() {
            Ok(stored) => self.normalize(stored),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "settings unreadable, using defaults");
                LoadedSettings {
                    settings: VaultSettings::new_default(),
                    origin: SettingsOrigin::Reset,
                }
            }
        }
    }

    /// Overwrite the settings file.
    pub fn save(&self, settings: &VaultSettings) -> Result<()> {
        let json = serde_json::to_vec(settings)
            .map_err(|e| VaultNoteError::SerializationError(format!("settings: {e}")))?;
        write_atomic(&self.path, &json)
    }

    fn read_stored(&self) -> Result<StoredSettings> {
        let contents = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| VaultNoteError::InvalidFormat(format!("settings JSON: {e}")))
    }

    fn normalize(&self, stored: StoredSettings) -> LoadedSettings {
        // A lock flag with nothing to verify against cannot be trusted.
        if stored.vault_locked && stored.vault_pin_hash.is_none() {
            tracing::warn!("settings locked without a PIN hash, using defaults");
            return LoadedSettings {
                settings: VaultSettings::new_default(),
                origin: SettingsOrigin::Reset,
            };
        }

        let mut repaired = false;

        let device_key = match stored.device_key.filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => {
                repaired = true;
                generate_device_key()
            }
        };

        let vault_pin_hash = if stored.vault_locked {
            stored.vault_pin_hash
        } else {
            repaired |= stored.vault_pin_hash.is_some();
            None
        };

        let settings = VaultSettings {
            vault_locked: stored.vault_locked,
            vault_pin_hash,
            device_key,
        };

        if !repaired {
            return LoadedSettings {
                settings,
                origin: SettingsOrigin::Loaded,
            };
        }

        if let Err(e) = self.save(&settings) {
            tracing::warn!(error = %e, "could not persist repaired settings");
        }
        tracing::debug!("repaired settings");
        LoadedSettings {
            settings,
            origin: SettingsOrigin::Repaired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store() -> (TempDir, SettingsStore) {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("vault_settings.json"));
        (dir, store)
    }

    #[test]
    fn first_load_creates_and_persists_defaults() {
        let (_dir, store) = store();
        let loaded = store.load();
        assert_eq!(loaded.origin, SettingsOrigin::Created);
        assert!(!loaded.settings.vault_locked);
        assert!(loaded.settings.vault_pin_hash.is_none());
        assert!(store.path().exists());

        let again = store.load();
        assert_eq!(again.origin, SettingsOrigin::Loaded);
        assert_eq!(again.settings, loaded.settings);
    }

    #[test]
    fn missing_device_key_is_repaired_and_persisted() {
        let (_dir, store) = store();
        fs::write(store.path(), r#"{"vault_locked": false, "vault_pin_hash": null}"#).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.origin, SettingsOrigin::Repaired);
        assert!(!loaded.settings.device_key.is_empty());

        let again = store.load();
        assert_eq!(again.origin, SettingsOrigin::Loaded);
        assert_eq!(again.settings.device_key, loaded.settings.device_key);
    }

    #[test]
    fn corrupt_file_fails_open_without_persisting() {
        let (_dir, store) = store();
        fs::write(store.path(), "{{not json").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.origin, SettingsOrigin::Reset);
        assert!(!loaded.settings.vault_locked);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{{not json");
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let (_dir, store) = store();
        fs::write(
            store.path(),
            r#"{"vault_locked": false, "vault_pin_hash": null, "device_key": "abc", "theme": "dark"}"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.origin, SettingsOrigin::Loaded);
        assert_eq!(loaded.settings.device_key, "abc");
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, store) = store();
        let settings = VaultSettings {
            vault_locked: true,
            vault_pin_hash: Some("h".into()),
            device_key: "k".into(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().settings, settings);
    }

    #[test]
    fn locked_without_hash_is_reset() {
        let (_dir, store) = store();
        fs::write(store.path(), r#"{"vault_locked": true, "device_key": "k"}"#).unwrap();
        assert_eq!(store.load().origin, SettingsOrigin::Reset);
    }
}
