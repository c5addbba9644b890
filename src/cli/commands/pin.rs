//! `vaultnote pin` — set, change or remove the vault PIN.
//!
//! Decrypts every document under the current secret, re-encrypts them
//! under the new one, then records the new lock state in the settings.

use crate::cli::output;
use crate::cli::{open_session, prompt_new_pin, Cli, PinAction};
use crate::errors::Result;

/// Execute the `pin` command.
pub fn execute(cli: &Cli, action: &PinAction) -> Result<()> {
    let mut session = open_session(cli)?;
    let was_locked = session.settings().vault_locked;

    match action {
        PinAction::Set => {
            output::info("Choose your new vault PIN.");
            let new_pin = prompt_new_pin("New vault PIN")?;
            session.change_vault_pin(Some(new_pin.as_str()))?;

            if was_locked {
                output::success("Vault PIN changed.");
            } else {
                output::success("Vault PIN set successfully.");
            }
        }
        PinAction::Remove => {
            session.change_vault_pin(None)?;
            output::success("Vault PIN removed.");
        }
    }

    output::info(&format!(
        "{} document(s) re-encrypted",
        session.document_count()
    ));

    Ok(())
}
