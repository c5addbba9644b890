//! One-way PIN hashing for the vault PIN and per-document locks.
//!
//! The hash is SHA-256 rendered as lowercase hex.  It gates access; it is
//! never used as key material.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hash a PIN to a 64-character hex string.
pub fn hash_pin(pin: &str) -> String {
    let hash = Sha256::digest(pin.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Check `pin` against a stored hash.
pub fn verify_pin(pin: &str, expected_hash: &str) -> bool {
    hash_pin(pin)
        .as_bytes()
        .ct_eq(expected_hash.as_bytes())
        .into()
}
