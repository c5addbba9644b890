//! Integration tests for the VaultNote crypto module.

use vaultnote::crypto::kdf::SALT_LEN;
use vaultnote::crypto::{decrypt, derive_key, encrypt, generate_salt, hash_pin, verify_pin};
use vaultnote::errors::VaultNoteError;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let samples = [
        "",
        "This is sensitive data that needs encryption",
        "multi\nline\n\ttext",
        "unicode: h\u{e9}llo \u{1f512} \u{4e16}\u{754c}",
    ];

    for plaintext in samples {
        let blob = encrypt(plaintext, "test_password_123").expect("encrypt should succeed");
        let recovered = decrypt(&blob, "test_password_123").expect("decrypt should succeed");
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn concrete_hello_vault_scenario() {
    let blob = encrypt("hello vault", "abc").expect("encrypt");

    assert_eq!(decrypt(&blob, "abc").expect("decrypt"), "hello vault");

    let result = decrypt(&blob, "abd");
    assert!(
        matches!(result, Err(VaultNoteError::AuthenticationFailed)),
        "a one-character change in the secret must fail authentication"
    );
}

#[test]
fn encrypt_produces_different_blobs_each_time() {
    let ct1 = encrypt("SECRET=hello", "pw").expect("encrypt 1");
    let ct2 = encrypt("SECRET=hello", "pw").expect("encrypt 2");

    // Fresh salt and nonce on every call.
    assert_ne!(ct1, ct2, "two encryptions of the same plaintext must differ");

    assert_eq!(decrypt(&ct1, "pw").unwrap(), "SECRET=hello");
    assert_eq!(decrypt(&ct2, "pw").unwrap(), "SECRET=hello");
}

#[test]
fn decrypt_with_wrong_secret_fails_authentication() {
    let blob = encrypt("Secret information", "correct_pass").expect("encrypt");
    let result = decrypt(&blob, "wrong_pass");

    assert!(matches!(result, Err(VaultNoteError::AuthenticationFailed)));
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails_authentication() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    let blob = encrypt("VALUE=abc", "pw").expect("encrypt");
    let mut raw = BASE64.decode(&blob).unwrap();
    // Flip a byte in the ciphertext portion (after salt + nonce).
    let last = raw.len() - 1;
    raw[last] ^= 0xFF;
    let tampered = BASE64.encode(raw);

    assert!(matches!(
        decrypt(&tampered, "pw"),
        Err(VaultNoteError::AuthenticationFailed)
    ));
}

#[test]
fn decrypt_truncated_blob_is_format_error() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;

    let truncated = BASE64.encode([0u8; 27]);
    assert!(matches!(
        decrypt(&truncated, "pw"),
        Err(VaultNoteError::InvalidFormat(_))
    ));
}

#[test]
fn decrypt_malformed_base64_is_format_error() {
    assert!(matches!(
        decrypt("%%% not base64 %%%", "pw"),
        Err(VaultNoteError::InvalidFormat(_))
    ));
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt();

    let key1 = derive_key("my-secure-passphrase", &salt);
    let key2 = derive_key("my-secure-passphrase", &salt);

    assert_eq!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn derive_key_different_salts_different_keys() {
    let salt1 = [0x01u8; SALT_LEN];
    let salt2 = [0x02u8; SALT_LEN];

    let key1 = derive_key("same-password", &salt1);
    let key2 = derive_key("same-password", &salt2);

    assert_ne!(key1.as_bytes(), key2.as_bytes());
}

// ---------------------------------------------------------------------------
// PIN hashing
// ---------------------------------------------------------------------------

#[test]
fn pin_hash_is_consistent_and_one_way() {
    let h1 = hash_pin("1234");
    let h2 = hash_pin("1234");

    assert_eq!(h1, h2, "PIN hashes should be consistent");
    assert_ne!(h1, "1234", "PIN should be hashed, not plaintext");
    assert!(verify_pin("1234", &h1));
    assert!(!verify_pin("4321", &h1));
}
