//! Single-document export (`.venc`).
//!
//! An export is the same base64 blob format as the vault file, but its
//! payload is one `{title, content, timestamp}` record encrypted under a
//! PIN chosen at export time.  The vault secret is never involved.

use serde::{Deserialize, Serialize};

use crate::crypto::encryption::{decrypt, encrypt};
use crate::errors::{Result, VaultNoteError};

use super::document::{now_iso8601, Document};
use super::format::EXPORT_EXTENSION;

/// Payload of a `.venc` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDocument {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

impl ExportedDocument {
    /// Turn an imported record back into an unlocked vault document.
    pub fn into_document(self) -> Result<Document> {
        let mut doc = Document::new(&self.title, &self.content, None)?;
        if !self.timestamp.is_empty() {
            doc.timestamp = self.timestamp;
        }
        Ok(doc)
    }
}

impl From<&Document> for ExportedDocument {
    fn from(doc: &Document) -> Self {
        let timestamp = if doc.timestamp.is_empty() {
            now_iso8601()
        } else {
            doc.timestamp.clone()
        };
        Self {
            title: doc.title.clone(),
            content: doc.content.clone(),
            timestamp,
        }
    }
}

/// File name for an export.
///
/// Spaces and path separators in the title become underscores and a
/// leading dot is replaced, so the name stays inside the export directory.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    let stem = match stem.strip_prefix('.') {
        Some(rest) => format!("_{rest}"),
        None => stem,
    };
    format!("{stem}.{EXPORT_EXTENSION}")
}

/// Encrypt a document for export under `export_pin`.
pub fn seal(doc: &Document, export_pin: &str) -> Result<String> {
    if export_pin.is_empty() {
        return Err(VaultNoteError::Validation(
            "Export PIN cannot be empty.".into(),
        ));
    }
    let json = serde_json::to_string(&ExportedDocument::from(doc))
        .map_err(|e| VaultNoteError::SerializationError(format!("export: {e}")))?;
    encrypt(&json, export_pin)
}

/// Decrypt a `.venc` blob with the PIN it was exported under.
pub fn open(blob: &str, export_pin: &str) -> Result<ExportedDocument> {
    let json = decrypt(blob, export_pin)?;
    serde_json::from_str(&json)
        .map_err(|e| VaultNoteError::InvalidFormat(format!("export payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(export_file_name("My Secret Note"), "My_Secret_Note.venc");
        assert_eq!(export_file_name("plain"), "plain.venc");
    }

    #[test]
    fn export_file_name_never_contains_a_path() {
        assert_eq!(export_file_name("../../etc/passwd"), "_._.._etc_passwd.venc");
        assert_eq!(export_file_name("a\\b"), "a_b.venc");
        assert_eq!(export_file_name(".hidden"), "_hidden.venc");

        let name = export_file_name("../x/..");
        assert!(!name.contains('/') && !name.contains('\\'));
        assert!(!name.starts_with('.'));
    }

    #[test]
    fn sealed_export_opens_with_export_pin_only() {
        let doc = Document::new("Plans", "world domination", Some("1111")).unwrap();
        let blob = seal(&doc, "export123").unwrap();

        let opened = open(&blob, "export123").unwrap();
        assert_eq!(opened.title, "Plans");
        assert_eq!(opened.content, "world domination");
        assert_eq!(opened.timestamp, doc.timestamp);

        assert!(matches!(
            open(&blob, "1111"),
            Err(VaultNoteError::AuthenticationFailed)
        ));
    }

    #[test]
    fn payload_omits_lock_fields() {
        let doc = Document::new("t", "c", Some("1")).unwrap();
        let json = serde_json::to_value(ExportedDocument::from(&doc)).unwrap();
        assert!(json.get("pin_hash").is_none());
        assert!(json.get("locked").is_none());
    }

    #[test]
    fn imported_document_is_unlocked_and_keeps_timestamp() {
        let exported = ExportedDocument {
            title: "t".into(),
            content: "c".into(),
            timestamp: "2024-05-01T10:00:00".into(),
        };
        let doc = exported.into_document().unwrap();
        assert!(!doc.locked);
        assert_eq!(doc.timestamp, "2024-05-01T10:00:00");
    }

    #[test]
    fn empty_export_pin_is_rejected() {
        let doc = Document::new("t", "c", None).unwrap();
        assert!(matches!(seal(&doc, ""), Err(VaultNoteError::Validation(_))));
    }
}
