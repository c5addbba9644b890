//! Vault module — encrypted document storage and access control.
//!
//! This module provides:
//! - `Document` and `DocumentMetadata` types (`document`)
//! - Vault and settings file handling (`format`)
//! - The settings record and its store (`settings`)
//! - `VaultStore`, the encrypted document list on disk (`store`)
//! - Per-document PIN gate (`lock`)
//! - Re-encryption when the vault PIN changes (`rekey`)
//! - Single-document `.venc` export (`export`)
//! - `VaultSession`, an unlocked vault (`session`)

pub mod document;
pub mod export;
pub mod format;
pub mod lock;
pub mod rekey;
pub mod session;
pub mod settings;
pub mod store;

pub use document::{Document, DocumentMetadata};
pub use rekey::{RekeyAction, Rekeyed};
pub use session::{unlock, VaultSession};
pub use settings::{LoadedSettings, SettingsOrigin, SettingsStore, VaultSettings};
pub use store::VaultStore;
