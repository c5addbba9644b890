//! AES-256-GCM authenticated encryption of text payloads.
//!
//! Each call to `encrypt` generates a fresh random salt and nonce, derives
//! the key from the caller's secret, and returns one self-contained
//! base64 blob.  `decrypt` needs only that blob and the same secret.
//!
//! Layout of the decoded blob:
//!   [ 16-byte salt | 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use super::kdf::{derive_key, generate_salt, SALT_LEN};
use crate::errors::{Result, VaultNoteError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Smallest decodable blob: salt + nonce.
pub const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypt `plaintext` under `secret` and return the base64 blob.
pub fn encrypt(plaintext: &str, secret: &str) -> Result<String> {
    let salt = generate_salt();
    let key = derive_key(secret, &salt);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultNoteError::EncryptionFailed(format!("invalid key length: {e}")))?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| VaultNoteError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut blob = Vec::with_capacity(MIN_BLOB_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    tracing::trace!(
        plaintext_len = plaintext.len(),
        blob_len = blob.len(),
        "encrypted payload"
    );

    Ok(BASE64.encode(blob))
}

/// Decrypt a blob produced by `encrypt`.
///
/// Malformed base64 or a blob shorter than salt + nonce is
/// `InvalidFormat`; a failed tag check is `AuthenticationFailed`.
/// No plaintext is returned unless the tag verifies.
pub fn decrypt(blob: &str, secret: &str) -> Result<String> {
    let raw = BASE64
        .decode(blob.trim())
        .map_err(|e| VaultNoteError::InvalidFormat(format!("bad base64: {e}")))?;

    if raw.len() < MIN_BLOB_LEN {
        return Err(VaultNoteError::InvalidFormat(format!(
            "blob is {} bytes, expected at least {MIN_BLOB_LEN}",
            raw.len()
        )));
    }

    let (salt, rest) = raw.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let mut salt_arr = [0u8; SALT_LEN];
    salt_arr.copy_from_slice(salt);
    let key = derive_key(secret, &salt_arr);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultNoteError::AuthenticationFailed)?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| VaultNoteError::AuthenticationFailed)?;

    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        VaultNoteError::InvalidFormat("plaintext is not valid UTF-8".into())
    })
}
