//! Per-document PIN gate.
//!
//! A locked document is *not* separately encrypted.  Its content is
//! protected by the vault-wide encryption like every other document; the
//! PIN only decides whether the application hands the content out.

use crate::crypto::pin::{hash_pin, verify_pin};

use super::document::Document;

/// Hash a document PIN.
pub fn lock(pin: &str) -> String {
    hash_pin(pin)
}

/// Check a PIN against a document's stored hash.
pub fn verify(pin: &str, pin_hash: &str) -> bool {
    verify_pin(pin, pin_hash)
}

/// Map an optional user PIN to the `(locked, pin_hash)` pair.
///
/// A missing or blank PIN means "no lock".
pub fn lock_state(pin: Option<&str>) -> (bool, Option<String>) {
    match pin.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => (true, Some(lock(p))),
        None => (false, None),
    }
}

/// Whether `pin` opens `doc`.  Unlocked documents always open.
pub fn can_open(doc: &Document, pin: Option<&str>) -> bool {
    if !doc.locked {
        return true;
    }
    match (&doc.pin_hash, pin) {
        (Some(hash), Some(pin)) => verify(pin.trim(), hash),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_pin_means_unlocked() {
        assert_eq!(lock_state(None), (false, None));
        assert_eq!(lock_state(Some("")), (false, None));
        assert_eq!(lock_state(Some("   ")), (false, None));
    }

    #[test]
    fn pin_produces_hash() {
        let (locked, hash) = lock_state(Some("9999"));
        assert!(locked);
        assert!(verify("9999", hash.as_deref().unwrap()));
    }

    #[test]
    fn locked_document_requires_matching_pin() {
        let doc = Document::new("t", "c", Some("9999")).unwrap();
        assert!(!can_open(&doc, None));
        assert!(!can_open(&doc, Some("0000")));
        assert!(can_open(&doc, Some("9999")));
    }

    #[test]
    fn unlocked_document_ignores_pin() {
        let doc = Document::new("t", "c", None).unwrap();
        assert!(can_open(&doc, None));
        assert!(can_open(&doc, Some("anything")));
    }

    #[test]
    fn locked_without_hash_never_opens() {
        let mut doc = Document::new("t", "c", None).unwrap();
        doc.locked = true;
        assert!(!can_open(&doc, Some("")));
    }
}
