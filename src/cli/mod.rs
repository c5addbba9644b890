//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Config;
use crate::errors::{Result, VaultNoteError};
use crate::vault::{SettingsOrigin, VaultSession};

/// Environment variable that supplies the vault PIN non-interactively.
pub const PIN_ENV: &str = "VAULTNOTE_PIN";

/// VaultNote CLI: personal encrypted note vault.
#[derive(Parser)]
#[command(name = "vaultnote", about = "Personal encrypted note vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the vault and settings files
    #[arg(short, long, default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Show vault lock state and document count
    Status,

    /// List all documents
    List,

    /// Print a document's content
    Show {
        /// Document index (from `list`)
        index: usize,
    },

    /// Save a new document, or replace one with --index
    Save {
        /// Document title
        #[arg(short, long)]
        title: String,

        /// Document content (omit to read stdin or open an editor)
        #[arg(short, long)]
        content: Option<String>,

        /// Replace the document at this index instead of adding one
        #[arg(short, long)]
        index: Option<usize>,

        /// Protect the document with its own PIN
        #[arg(long)]
        lock: bool,
    },

    /// Delete a document
    Delete {
        /// Document index
        index: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Set, change or remove the vault PIN
    Pin {
        #[command(subcommand)]
        action: PinAction,
    },

    /// Export a document as an encrypted .venc file
    Export {
        /// Document index
        index: usize,

        /// Output file path (default: <title>.venc in the export directory)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import a .txt file or a .venc export as a new document
    Import {
        /// Path to the file to import
        file: String,
    },
}

/// Vault PIN subcommands.
#[derive(clap::Subcommand)]
pub enum PinAction {
    /// Set or change the vault PIN
    Set,

    /// Remove the vault PIN (the vault stays encrypted with the device key)
    Remove,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load config and settings, ask for the vault PIN if one is set, and
/// decrypt the vault.
pub fn open_session(cli: &Cli) -> Result<VaultSession> {
    let config = Config::load(&cli.dir)?;
    let (vault, settings_store) = config.stores(&cli.dir);
    let loaded = settings_store.load();

    if loaded.origin == SettingsOrigin::Reset {
        output::warning("Settings file is unreadable — using fresh, unsaved settings.");
    }

    let pin = if loaded.settings.vault_locked {
        Some(prompt_vault_pin()?)
    } else {
        None
    };

    VaultSession::open(vault, settings_store, loaded, pin.as_deref().map(String::as_str))
}

/// Get the vault PIN from `VAULTNOTE_PIN` or an interactive prompt.
///
/// Returns `Zeroizing<String>` so the PIN is wiped from memory on drop.
pub fn prompt_vault_pin() -> Result<Zeroizing<String>> {
    if let Ok(pin) = std::env::var(PIN_ENV) {
        if !pin.is_empty() {
            return Ok(Zeroizing::new(pin));
        }
    }

    let pin = dialoguer::Password::new()
        .with_prompt("Enter vault PIN")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| VaultNoteError::CommandFailed(format!("PIN prompt: {e}")))?;
    Ok(Zeroizing::new(pin))
}

/// Prompt for a single PIN without confirmation.
pub fn prompt_pin(prompt: &str) -> Result<Zeroizing<String>> {
    let pin = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| VaultNoteError::CommandFailed(format!("PIN prompt: {e}")))?;
    Ok(Zeroizing::new(pin))
}

/// Prompt for a new PIN twice and require both entries to match.
pub fn prompt_new_pin(prompt: &str) -> Result<Zeroizing<String>> {
    let first = prompt_pin(prompt)?;
    let second = prompt_pin("Confirm PIN")?;
    if first.as_str() != second.as_str() {
        return Err(VaultNoteError::PinMismatch);
    }
    if first.trim().is_empty() {
        return Err(VaultNoteError::Validation("PIN cannot be empty.".into()));
    }
    Ok(first)
}

/// Ask for a document's PIN only if it is locked.
pub fn prompt_document_pin(session: &VaultSession, index: usize) -> Result<Option<Zeroizing<String>>> {
    let locked = session
        .list_documents()
        .get(index)
        .map(|d| d.locked)
        .ok_or(VaultNoteError::DocumentNotFound(index))?;

    if locked {
        Ok(Some(prompt_pin("Enter document PIN")?))
    } else {
        Ok(None)
    }
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| VaultNoteError::CommandFailed(format!("confirm prompt: {e}")))
}
