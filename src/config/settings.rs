use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultNoteError};
use crate::vault::format::{SETTINGS_FILE_NAME, VAULT_FILE_NAME};
use crate::vault::{SettingsStore, VaultStore};

/// Tool configuration, loaded from `vaultnote.toml` in the data directory.
///
/// Every field has a sensible default so VaultNote works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File name (relative to the data directory) of the encrypted vault.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// File name (relative to the data directory) of the settings record.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,

    /// Directory (relative to the data directory) that receives `.venc` exports.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    VAULT_FILE_NAME.to_string()
}

fn default_settings_file() -> String {
    SETTINGS_FILE_NAME.to_string()
}

fn default_export_dir() -> String {
    ".".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            settings_file: default_settings_file(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Name of the config file we look for in the data directory.
    pub const FILE_NAME: &'static str = "vaultnote.toml";

    /// Load config from `<data_dir>/vaultnote.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            VaultNoteError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(config)
    }

    pub fn vault_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.vault_file)
    }

    pub fn settings_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.settings_file)
    }

    pub fn export_path(&self, data_dir: &Path, file_name: &str) -> PathBuf {
        data_dir.join(&self.export_dir).join(file_name)
    }

    /// Build the vault and settings stores for `data_dir`.
    pub fn stores(&self, data_dir: &Path) -> (VaultStore, SettingsStore) {
        (
            VaultStore::new(self.vault_path(data_dir)),
            SettingsStore::new(self.settings_path(data_dir)),
        )
    }
}

// ── Tests ────────────────────────────────────────────────────────────
