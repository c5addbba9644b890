//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! Every vault secret (a PIN or the generated device key) is stretched
//! into a 256-bit AES key with a per-blob random salt.  The iteration
//! count is fixed: changing it would make existing blobs unreadable,
//! because nothing in the blob records it.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use super::keys::DerivedKey;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a secret and salt.
///
/// The same secret + salt always produce the same key.
pub fn derive_key(secret: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(secret.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    tracing::trace!(iterations = PBKDF2_ITERATIONS, "derived key");
    DerivedKey::new(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
