//! An open vault: settings, active secret and decrypted documents.
//!
//! `VaultSession::open` is the only way in.  It resolves the active
//! secret (device key or vault PIN), decrypts the vault and refuses to
//! hand out a session if decryption fails, so a later save can never
//! overwrite an unreadable vault with an empty list.  Dropping the
//! session wipes the active secret.

use zeroize::Zeroizing;

use crate::crypto::pin::verify_pin;
use crate::errors::{Result, VaultNoteError};

use super::document::{Document, DocumentMetadata};
use super::export::{self, export_file_name};
use super::lock;
use super::rekey::{self, RekeyAction};
use super::settings::{LoadedSettings, SettingsOrigin, SettingsStore, VaultSettings};
use super::store::VaultStore;

/// Resolve the active secret for `settings`.
///
/// Without a vault PIN the device key is the secret and `pin` is ignored.
/// With one, `pin` must match the stored hash or access is denied.
pub fn unlock(settings: &VaultSettings, pin: Option<&str>) -> Result<Zeroizing<String>> {
    if !settings.vault_locked {
        return Ok(Zeroizing::new(settings.device_key.clone()));
    }

    let pin = pin.map(str::trim).unwrap_or_default();
    match &settings.vault_pin_hash {
        Some(hash) if verify_pin(pin, hash) => Ok(Zeroizing::new(pin.to_string())),
        _ => Err(VaultNoteError::AccessDenied),
    }
}

/// A decrypted vault.
pub struct VaultSession {
    vault: VaultStore,
    settings_store: SettingsStore,
    settings: VaultSettings,
    settings_origin: SettingsOrigin,
    active_secret: Zeroizing<String>,
    documents: Vec<Document>,
}

impl VaultSession {
    /// Unlock and decrypt the vault.
    pub fn open(
        vault: VaultStore,
        settings_store: SettingsStore,
        loaded: LoadedSettings,
        pin: Option<&str>,
    ) -> Result<Self> {
        let active_secret = unlock(&loaded.settings, pin)?;

        let (documents, ok) = vault.load(&active_secret);
        if !ok {
            return Err(VaultNoteError::VaultUnreadable);
        }

        tracing::debug!(
            documents = documents.len(),
            locked = loaded.settings.vault_locked,
            "vault opened"
        );

        Ok(Self {
            vault,
            settings_store,
            settings: loaded.settings,
            settings_origin: loaded.origin,
            active_secret,
            documents,
        })
    }

    pub fn settings(&self) -> &VaultSettings {
        &self.settings
    }

    pub fn settings_origin(&self) -> SettingsOrigin {
        self.settings_origin
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Titles and lock markers in display order.
    pub fn list_documents(&self) -> Vec<DocumentMetadata> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, d)| d.metadata(i))
            .collect()
    }

    /// Open a document, checking its PIN if it is locked.
    pub fn select_document(&self, index: usize, pin: Option<&str>) -> Result<&Document> {
        let doc = self.document(index)?;
        if !lock::can_open(doc, pin) {
            return Err(VaultNoteError::AccessDenied);
        }
        Ok(doc)
    }

    /// Append a new document, or replace the one at `index`.
    ///
    /// Replacing a locked document needs its PIN in `doc_pin`.  Returns
    /// the index of the saved document.  On a validation, access or write
    /// error the in-memory list is unchanged.
    pub fn save_document(
        &mut self,
        index: Option<usize>,
        doc_pin: Option<&str>,
        title: &str,
        content: &str,
        pin: Option<&str>,
    ) -> Result<usize> {
        if let Some(i) = index {
            self.select_document(i, doc_pin)?;
        }

        let doc = Document::new(title, content, pin)?;
        let mut next = self.documents.clone();

        let saved_at = match index {
            Some(i) => {
                next[i] = doc;
                i
            }
            None => {
                next.push(doc);
                next.len() - 1
            }
        };

        self.commit(next)?;
        Ok(saved_at)
    }

    /// Remove the document at `index` and return it.
    ///
    /// A locked document needs its PIN in `doc_pin`.
    pub fn delete_document(&mut self, index: usize, doc_pin: Option<&str>) -> Result<Document> {
        self.select_document(index, doc_pin)?;
        let mut next = self.documents.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Set, change or remove the vault PIN.
    ///
    /// `None` or a blank PIN removes the lock.
    pub fn change_vault_pin(&mut self, new_pin: Option<&str>) -> Result<()> {
        let action = match new_pin.map(str::trim).filter(|p| !p.is_empty()) {
            Some(pin) if self.settings.vault_locked => RekeyAction::ChangePin(pin.to_string()),
            Some(pin) => RekeyAction::SetPin(pin.to_string()),
            None => RekeyAction::RemovePin,
        };

        let out = rekey::rekey(
            &self.vault,
            &self.settings_store,
            &self.settings,
            &self.active_secret,
            &action,
        )?;

        self.settings = out.settings;
        self.active_secret = out.active_secret;
        self.documents = out.documents;
        self.settings_origin = SettingsOrigin::Loaded;
        Ok(())
    }

    /// Encrypt one document under `export_pin`.
    ///
    /// Returns the suggested file name and the blob.  A locked document
    /// needs its own PIN first.
    pub fn export_document(
        &self,
        index: usize,
        doc_pin: Option<&str>,
        export_pin: &str,
    ) -> Result<(String, String)> {
        let doc = self.select_document(index, doc_pin)?;
        let blob = export::seal(doc, export_pin)?;
        Ok((export_file_name(&doc.title), blob))
    }

    /// Add plaintext produced by an external reader as a new document.
    pub fn import_plaintext(&mut self, title: &str, content: &str) -> Result<usize> {
        self.save_document(None, None, title, content, None)
    }

    /// Decrypt a `.venc` blob and add it as a new unlocked document.
    pub fn import_export(&mut self, blob: &str, export_pin: &str) -> Result<usize> {
        let doc = export::open(blob, export_pin)?.into_document()?;
        let mut next = self.documents.clone();
        next.push(doc);
        let index = next.len() - 1;
        self.commit(next)?;
        Ok(index)
    }

    fn document(&self, index: usize) -> Result<&Document> {
        self.documents
            .get(index)
            .ok_or(VaultNoteError::DocumentNotFound(index))
    }

    fn commit(&mut self, documents: Vec<Document>) -> Result<()> {
        // A reset device key only lives in memory; persist it before the
        // vault is encrypted under it.
        if self.settings_origin == SettingsOrigin::Reset {
            self.settings_store.save(&self.settings)?;
            self.settings_origin = SettingsOrigin::Loaded;
            tracing::info!("reset settings persisted before first vault write");
        }

        self.vault.save(&documents, &self.active_secret)?;
        self.documents = documents;
        Ok(())
    }
}
