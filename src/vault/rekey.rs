//! Re-encryption of the vault when the vault-wide secret changes.
//!
//! Every transition runs the same sequence:
//!
//! 1. Decrypt the document list under the current secret.  On failure,
//!    stop: nothing on disk has been touched.
//! 2. Build the new settings record.
//! 3. Re-encrypt the same documents under the new secret and replace the
//!    vault file.
//! 4. Persist the new settings.
//!
//! Known limitation: if the process dies between steps 3 and 4, the vault
//! is encrypted under the new secret while the settings still describe
//! the old one.  There is no multi-file transaction.

use zeroize::Zeroizing;

use crate::crypto::pin::hash_pin;
use crate::errors::{Result, VaultNoteError};

use super::document::Document;
use super::settings::{SettingsStore, VaultSettings};
use super::store::VaultStore;

/// A change of the vault-wide secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RekeyAction {
    /// Lock a vault that currently uses the device key.
    SetPin(String),
    /// Replace the current vault PIN.
    ChangePin(String),
    /// Go back to the device key.
    RemovePin,
}

/// State after a successful rekey.
pub struct Rekeyed {
    pub settings: VaultSettings,
    pub active_secret: Zeroizing<String>,
    pub documents: Vec<Document>,
}

impl std::fmt::Debug for Rekeyed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rekeyed")
            .field("settings", &self.settings)
            .field("documents", &self.documents.len())
            .finish_non_exhaustive()
    }
}

/// Run one rekey transition.
///
/// `settings` and `current_secret` describe the state before the change;
/// they are not modified, so the caller keeps a valid state on error.
pub fn rekey(
    vault: &VaultStore,
    settings_store: &SettingsStore,
    settings: &VaultSettings,
    current_secret: &str,
    action: &RekeyAction,
) -> Result<Rekeyed> {
    let (new_settings, new_secret) = next_state(settings, action)?;

    let documents = vault.try_load(current_secret).map_err(|e| {
        tracing::warn!(error = %e, "rekey aborted, vault did not open under the current secret");
        VaultNoteError::VaultUnreadable
    })?;

    vault.save(&documents, &new_secret)?;

    if let Err(e) = settings_store.save(&new_settings) {
        tracing::error!(
            error = %e,
            "vault re-encrypted but settings were not saved; settings now describe the old secret"
        );
        return Err(e);
    }

    tracing::debug!(
        action = action_name(action),
        documents = documents.len(),
        locked = new_settings.vault_locked,
        "vault rekeyed"
    );

    Ok(Rekeyed {
        settings: new_settings,
        active_secret: new_secret,
        documents,
    })
}

/// Lock the vault with `new_pin`.
pub fn set_pin(
    vault: &VaultStore,
    settings_store: &SettingsStore,
    settings: &VaultSettings,
    current_secret: &str,
    new_pin: &str,
) -> Result<Rekeyed> {
    let action = RekeyAction::SetPin(new_pin.to_string());
    rekey(vault, settings_store, settings, current_secret, &action)
}

/// Replace the vault PIN; `current_pin` is the PIN in force now.
pub fn change_pin(
    vault: &VaultStore,
    settings_store: &SettingsStore,
    settings: &VaultSettings,
    current_pin: &str,
    new_pin: &str,
) -> Result<Rekeyed> {
    let action = RekeyAction::ChangePin(new_pin.to_string());
    rekey(vault, settings_store, settings, current_pin, &action)
}

/// Remove the vault PIN and fall back to the device key.
pub fn remove_pin(
    vault: &VaultStore,
    settings_store: &SettingsStore,
    settings: &VaultSettings,
    current_secret: &str,
) -> Result<Rekeyed> {
    rekey(
        vault,
        settings_store,
        settings,
        current_secret,
        &RekeyAction::RemovePin,
    )
}

fn next_state(
    settings: &VaultSettings,
    action: &RekeyAction,
) -> Result<(VaultSettings, Zeroizing<String>)> {
    match action {
        RekeyAction::SetPin(pin) | RekeyAction::ChangePin(pin) => {
            let pin = pin.trim();
            if pin.is_empty() {
                return Err(VaultNoteError::Validation(
                    "Vault PIN cannot be empty.".into(),
                ));
            }
            if matches!(action, RekeyAction::ChangePin(_)) && !settings.vault_locked {
                return Err(VaultNoteError::Validation(
                    "No vault PIN is set.".into(),
                ));
            }
            let next = VaultSettings {
                vault_locked: true,
                vault_pin_hash: Some(hash_pin(pin)),
                device_key: settings.device_key.clone(),
            };
            Ok((next, Zeroizing::new(pin.to_string())))
        }
        RekeyAction::RemovePin => {
            let next = VaultSettings {
                vault_locked: false,
                vault_pin_hash: None,
                device_key: settings.device_key.clone(),
            };
            Ok((next, Zeroizing::new(settings.device_key.clone())))
        }
    }
}

fn action_name(action: &RekeyAction) -> &'static str {
    match action {
        RekeyAction::SetPin(_) => "set-pin",
        RekeyAction::ChangePin(_) => "change-pin",
        RekeyAction::RemovePin => "remove-pin",
    }
}
