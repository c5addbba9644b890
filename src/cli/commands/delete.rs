//! `vaultnote delete` — remove a document from the vault.

use crate::cli::output;
use crate::cli::{confirm, open_session, prompt_document_pin, Cli};
use crate::errors::{Result, VaultNoteError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, index: usize, force: bool) -> Result<()> {
    let mut session = open_session(cli)?;

    let title = session
        .list_documents()
        .get(index)
        .map(|d| d.title.clone())
        .ok_or(VaultNoteError::DocumentNotFound(index))?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm(&format!("Delete document '{title}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    let pin = prompt_document_pin(&session, index)?;
    session.delete_document(index, pin.as_deref().map(String::as_str))?;
    output::success(&format!("Deleted document '{title}'"));

    Ok(())
}
