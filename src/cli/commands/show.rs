//! `vaultnote show` — print one document's content.

use crate::cli::{open_session, prompt_document_pin, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, index: usize) -> Result<()> {
    let session = open_session(cli)?;

    let pin = prompt_document_pin(&session, index)?;
    let doc = session.select_document(index, pin.as_deref().map(String::as_str))?;

    println!("{}", doc.content);

    Ok(())
}
