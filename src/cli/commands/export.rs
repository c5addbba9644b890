//! `vaultnote export` — write one document as an encrypted `.venc` file.
//!
//! The export is encrypted under a PIN chosen now, independent of the
//! vault PIN, so it can be shared and imported into another vault.

use std::fs;
use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{open_session, prompt_document_pin, prompt_new_pin, Cli};
use crate::config::Config;
use crate::errors::{Result, VaultNoteError};
use crate::vault::format::write_atomic;

/// Execute the `export` command.
pub fn execute(cli: &Cli, index: usize, output_path: Option<&str>) -> Result<()> {
    let session = open_session(cli)?;
    let config = Config::load(&cli.dir)?;

    let doc_pin = prompt_document_pin(&session, index)?;
    // Check the document PIN before asking for an export PIN.
    session.select_document(index, doc_pin.as_deref().map(String::as_str))?;

    let export_pin = prompt_new_pin("Enter PIN for export encryption")?;
    let (file_name, blob) =
        session.export_document(index, doc_pin.as_deref().map(String::as_str), &export_pin)?;

    let dest = match output_path {
        Some(p) => PathBuf::from(p),
        None => config.export_path(&cli.dir, &file_name),
    };

    // Safety: refuse to overwrite the vault itself.
    if dest.exists()
        && fs::canonicalize(&dest).ok() == fs::canonicalize(config.vault_path(&cli.dir)).ok()
    {
        return Err(VaultNoteError::CommandFailed(
            "refusing to export over the vault file".into(),
        ));
    }

    write_atomic(&dest, blob.as_bytes())?;
    output::success(&format!("Document exported as '{}'", dest.display()));

    Ok(())
}
