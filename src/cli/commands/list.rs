//! `vaultnote list` — display all documents in a table.

use crate::cli::output;
use crate::cli::{open_session, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;
    let documents = session.list_documents();

    output::info(&format!("{} document(s)", documents.len()));
    output::print_documents_table(&documents);

    Ok(())
}
