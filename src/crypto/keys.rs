//! Key material helpers.
//!
//! - [`DerivedKey`] holds an AES key and wipes it when dropped.
//! - [`generate_device_key`] creates the random secret that encrypts the
//!   vault while no vault PIN is set.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::RngCore;
use zeroize::Zeroize;

use super::kdf::KEY_LEN;

/// Length of the raw device key in bytes (256 bits).
pub const DEVICE_KEY_LEN: usize = 32;

/// A 32-byte symmetric key that automatically zeroes its memory when
/// dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Generate a fresh device key: 32 random bytes, base64-encoded.
pub fn generate_device_key() -> String {
    let mut raw = [0u8; DEVICE_KEY_LEN];
    rand::rng().fill_bytes(&mut raw);
    let encoded = BASE64.encode(raw);
    raw.zeroize();
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_keys_are_unique() {
        assert_ne!(generate_device_key(), generate_device_key());
    }

    #[test]
    fn device_key_decodes_to_32_bytes() {
        let key = generate_device_key();
        let raw = BASE64.decode(&key).unwrap();
        assert_eq!(raw.len(), DEVICE_KEY_LEN);
    }
}
