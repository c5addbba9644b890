//! On-disk file handling for the vault and settings files.
//!
//! The vault file holds nothing but the base64 text of one encrypted blob
//! (`salt | nonce | ciphertext+tag`).  There is no header or version
//! field, so the blob layout itself is the format.

use std::fs;
use std::path::Path;

use crate::errors::Result;

/// Default file name of the encrypted vault.
pub const VAULT_FILE_NAME: &str = "vault_data.enc";

/// Default file name of the settings record.
pub const SETTINGS_FILE_NAME: &str = "vault_settings.json";

/// File extension of single-document exports.
pub const EXPORT_EXTENSION: &str = "venc";

/// Read an encrypted blob from disk.
///
/// Returns `Ok(None)` if the file does not exist yet.
pub fn read_blob(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    Ok(Some(text))
}

/// Write `bytes` to `path` via a temp file in the same directory and a
/// rename, so readers never see a half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
