//! Persistence of the document list as one encrypted blob.
//!
//! `VaultStore` knows only the vault file path.  The caller supplies the
//! active secret on every call; the whole list is re-encrypted with a
//! fresh salt and nonce on each save.

use std::path::{Path, PathBuf};

use crate::crypto::encryption::{decrypt, encrypt};
use crate::errors::{Result, VaultNoteError};

use super::document::Document;
use super::format::{read_blob, write_atomic};

/// Handle to the encrypted vault file.
#[derive(Debug, Clone)]
pub struct VaultStore {
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once the vault has been saved at least once.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document list, collapsing every failure into a flag.
    ///
    /// - no vault file: `(empty, true)`
    /// - decrypted and parsed: `(documents, true)`
    /// - wrong secret, tampering or a bad payload: `(empty, false)`
    ///
    /// A `false` flag must stop the caller from saving, or the empty list
    /// would overwrite the real vault.
    pub fn load(&self, secret: &str) -> (Vec<Document>, bool) {
        match self.try_load(secret) {
            Ok(documents) => (documents, true),
            Err(e) => {
                tracing::debug!(error = %e, "vault load failed");
                (Vec::new(), false)
            }
        }
    }

    /// Load the document list with the failure kind preserved.
    ///
    /// A missing vault file is an empty list, not an error.
    pub fn try_load(&self, secret: &str) -> Result<Vec<Document>> {
        let Some(blob) = read_blob(&self.path)? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }

        let json = decrypt(&blob, secret)?;
        let documents: Vec<Document> = serde_json::from_str(&json)
            .map_err(|e| VaultNoteError::InvalidFormat(format!("vault payload: {e}")))?;

        tracing::debug!(count = documents.len(), "vault loaded");
        Ok(documents)
    }

    /// Encrypt `documents` under `secret` and replace the vault file.
    pub fn save(&self, documents: &[Document], secret: &str) -> Result<()> {
        let json = serde_json::to_string(documents)
            .map_err(|e| VaultNoteError::SerializationError(format!("documents: {e}")))?;
        let blob = encrypt(&json, secret)?;
        write_atomic(&self.path, blob.as_bytes())?;

        tracing::debug!(count = documents.len(), "vault saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store() -> (TempDir, VaultStore) {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault_data.enc"));
        (dir, store)
    }

    #[test]
    fn empty_file_is_empty_vault() {
        let (_dir, store) = store();
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load("any"), (Vec::new(), true));
    }

    #[test]
    fn non_json_payload_fails_load() {
        let (_dir, store) = store();
        let blob = encrypt("not a list", "s").unwrap();
        fs::write(store.path(), blob).unwrap();

        assert!(matches!(
            store.try_load("s"),
            Err(VaultNoteError::InvalidFormat(_))
        ));
        assert_eq!(store.load("s"), (Vec::new(), false));
    }

    #[test]
    fn each_save_writes_a_new_blob() {
        let (_dir, store) = store();
        let docs = vec![Document::new("a", "b", None).unwrap()];

        store.save(&docs, "s").unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        store.save(&docs, "s").unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.load("s"), (docs, true));
    }
}
