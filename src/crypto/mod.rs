//! Cryptographic primitives for VaultNote.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 key derivation (`kdf`)
//! - Zeroizing key wrapper and device-key generation (`keys`)
//! - AES-256-GCM blob encryption and decryption (`encryption`)
//! - SHA-256 PIN hashing (`pin`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod pin;

pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt};
pub use keys::{generate_device_key, DerivedKey};
pub use pin::{hash_pin, verify_pin};
