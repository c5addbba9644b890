//! `vaultnote save` — add a document or replace an existing one.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{open_session, prompt_document_pin, prompt_new_pin, Cli};
use crate::errors::{Result, VaultNoteError};

/// Execute the `save` command.
pub fn execute(
    cli: &Cli,
    title: &str,
    content: Option<&str>,
    index: Option<usize>,
    lock: bool,
) -> Result<()> {
    let body = read_content(content)?;

    let mut session = open_session(cli)?;

    // Replacing a locked document needs its current PIN.
    let doc_pin = match index {
        Some(i) => prompt_document_pin(&session, i)?,
        None => None,
    };

    let pin = if lock {
        Some(prompt_new_pin("Choose document PIN")?)
    } else {
        None
    };

    let saved_at = session.save_document(
        index,
        doc_pin.as_deref().map(String::as_str),
        title,
        &body,
        pin.as_deref().map(String::as_str),
    )?;

    let verb = if index.is_some() { "updated" } else { "added" };
    output::success(&format!(
        "Document '{}' {verb} at #{saved_at} ({} total)",
        title.trim(),
        session.document_count()
    ));

    Ok(())
}

/// Determine the content from one of three sources.
fn read_content(content: Option<&str>) -> Result<String> {
    if let Some(c) = content {
        // Source 1: Inline on the command line.
        return Ok(c.to_string());
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input.
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    // Source 3: The user's editor.
    dialoguer::Editor::new()
        .extension(".txt")
        .edit("")
        .map_err(|e| VaultNoteError::CommandFailed(format!("editor: {e}")))?
        .ok_or(VaultNoteError::UserCancelled)
}
