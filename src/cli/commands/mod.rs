//! One module per subcommand; each exposes `execute`.

pub mod delete;
pub mod export;
pub mod import_cmd;
pub mod list;
pub mod pin;
pub mod save;
pub mod show;
pub mod status;
