use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in VaultNote.
#[derive(Debug, Error)]
pub enum VaultNoteError {
    // --- Crypto errors ---
    #[error("Decryption failed — wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Invalid encrypted data: {0}")]
    InvalidFormat(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Vault errors ---
    #[error("Failed to load vault — wrong password or corrupted data")]
    VaultUnreadable,

    #[error("Access denied")]
    AccessDenied,

    #[error("{0}")]
    Validation(String),

    #[error("No document at index {0}")]
    DocumentNotFound(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("PIN mismatch — PINs do not match")]
    PinMismatch,
}

/// Convenience type alias for VaultNote results.
pub type Result<T> = std::result::Result<T, VaultNoteError>;
