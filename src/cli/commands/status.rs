//! `vaultnote status` — show lock state and document count.

use crate::cli::output;
use crate::cli::{open_session, Cli};
use crate::errors::Result;
use crate::vault::SettingsOrigin;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = open_session(cli)?;

    if session.settings().vault_locked {
        output::info("Vault PIN: set");
    } else {
        output::info("Vault PIN: not set (encrypted with the device key)");
    }

    let locked = session.list_documents().iter().filter(|d| d.locked).count();
    output::info(&format!(
        "{} document(s), {locked} with a document PIN",
        session.document_count()
    ));

    match session.settings_origin() {
        SettingsOrigin::Created => output::tip("New vault settings were created."),
        SettingsOrigin::Repaired => output::tip("Vault settings were repaired."),
        SettingsOrigin::Reset => {
            output::warning("Settings were reset; they will be saved on the next write.")
        }
        SettingsOrigin::Loaded => {}
    }

    Ok(())
}
