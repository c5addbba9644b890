//! `vaultnote import` — add a document from an external file.
//!
//! Supported inputs:
//! - `.venc` exports (decrypted with the PIN chosen at export time)
//! - plain text files (`.txt`, `.md`, or no extension), title = file name

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_session, prompt_pin, Cli};
use crate::errors::{Result, VaultNoteError};
use crate::vault::format::EXPORT_EXTENSION;

/// What kind of file is being imported.
#[derive(Debug, PartialEq, Eq)]
enum ImportKind {
    Export,
    Plaintext,
}

/// Execute the `import` command.
pub fn execute(cli: &Cli, file_path: &str) -> Result<()> {
    let source = Path::new(file_path);

    if !source.exists() {
        return Err(VaultNoteError::FileNotFound(source.to_path_buf()));
    }

    let kind = detect_kind(source)?;
    let text = fs::read_to_string(source)?;

    let mut session = open_session(cli)?;

    let index = match kind {
        ImportKind::Export => {
            let pin = prompt_pin("Enter export PIN")?;
            session.import_export(&text, &pin)?
        }
        ImportKind::Plaintext => session.import_plaintext(&title_for(source), &text)?,
    };

    output::success(&format!(
        "Imported {} as document #{index}",
        source.display()
    ));
    output::tip("Run `vaultnote save --index <N> --title <TITLE> --lock` to add a document PIN.");

    Ok(())
}

/// Pick the import kind from the file extension.
fn detect_kind(path: &Path) -> Result<ImportKind> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some(e) if e == EXPORT_EXTENSION => Ok(ImportKind::Export),
        None | Some("txt") | Some("md") => Ok(ImportKind::Plaintext),
        Some(other) => Err(VaultNoteError::CommandFailed(format!(
            "unsupported file type: .{other}"
        ))),
    }
}

/// Document title for a plaintext import: the file name.
fn title_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_exports_case_insensitively() {
        assert_eq!(detect_kind(Path::new("a.venc")).unwrap(), ImportKind::Export);
        assert_eq!(detect_kind(Path::new("a.VENC")).unwrap(), ImportKind::Export);
    }

    #[test]
    fn detects_plaintext() {
        assert_eq!(detect_kind(Path::new("notes.txt")).unwrap(), ImportKind::Plaintext);
        assert_eq!(detect_kind(Path::new("README")).unwrap(), ImportKind::Plaintext);
    }

    #[test]
    fn rejects_documents_needing_extraction() {
        assert!(detect_kind(Path::new("report.pdf")).is_err());
        assert!(detect_kind(Path::new("letter.docx")).is_err());
    }

    #[test]
    fn title_is_file_name() {
        assert_eq!(title_for(Path::new("/tmp/dir/ideas.txt")), "ideas.txt");
    }
}
