//! Document and DocumentMetadata types stored inside a vault.
//!
//! The whole `Vec<Document>` is serialized to JSON and encrypted as one
//! blob; individual documents carry no ciphertext of their own.  A locked
//! document only stores the hash of its PIN.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::lock;
use crate::errors::{Result, VaultNoteError};

/// A single note stored in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,

    pub content: String,

    /// Whether a document PIN gates access to the content.
    #[serde(default)]
    pub locked: bool,

    /// SHA-256 hex of the document PIN; present iff `locked`.
    #[serde(default)]
    pub pin_hash: Option<String>,

    /// ISO-8601 local time of the last save.
    #[serde(default)]
    pub timestamp: String,
}

impl Document {
    /// Build a document from user input.
    ///
    /// Title, content and PIN are trimmed.  Empty title or content is
    /// rejected; an empty PIN leaves the document unlocked.
    pub fn new(title: &str, content: &str, pin: Option<&str>) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(VaultNoteError::Validation(
                "Title and content cannot be empty.".into(),
            ));
        }

        let (locked, pin_hash) = lock::lock_state(pin);

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            locked,
            pin_hash,
            timestamp: now_iso8601(),
        })
    }

    /// Metadata-only view, safe to show for locked documents.
    pub fn metadata(&self, index: usize) -> DocumentMetadata {
        DocumentMetadata {
            index,
            title: self.title.clone(),
            locked: self.locked,
            timestamp: self.timestamp.clone(),
        }
    }
}

/// Lightweight metadata about a document (no content).
///
/// Returned by `VaultSession::list_documents` so callers can display
/// titles and lock markers without exposing locked content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub index: usize,
    pub title: String,
    pub locked: bool,
    pub timestamp: String,
}

impl DocumentMetadata {
    /// Title with a lock marker appended for locked documents.
    pub fn label(&self) -> String {
        if self.locked {
            format!("{} \u{1f512}", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// Current local time as an ISO-8601 string with microseconds.
pub fn now_iso8601() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_stamps() {
        let doc = Document::new("  Groceries ", " milk\n", None).unwrap();
        assert_eq!(doc.title, "Groceries");
        assert_eq!(doc.content, "milk");
        assert!(!doc.locked);
        assert!(doc.pin_hash.is_none());
        assert!(!doc.timestamp.is_empty());
    }

    #[test]
    fn new_rejects_empty_fields() {
        assert!(matches!(
            Document::new("", "x", None),
            Err(VaultNoteError::Validation(_))
        ));
        assert!(matches!(
            Document::new("x", "   ", None),
            Err(VaultNoteError::Validation(_))
        ));
    }

    #[test]
    fn pin_locks_document() {
        let doc = Document::new("t", "c", Some("9999")).unwrap();
        assert!(doc.locked);
        assert!(doc.pin_hash.is_some());
    }

    #[test]
    fn deserializes_records_without_optional_fields() {
        let doc: Document = serde_json::from_str(r#"{"title":"a","content":"b"}"#).unwrap();
        assert!(!doc.locked);
        assert!(doc.pin_hash.is_none());
    }

    #[test]
    fn label_marks_locked_documents() {
        let doc = Document::new("Diary", "secret", Some("1")).unwrap();
        assert!(doc.metadata(0).label().starts_with("Diary "));
        let open = Document::new("Todo", "x", None).unwrap();
        assert_eq!(open.metadata(1).label(), "Todo");
    }
}
