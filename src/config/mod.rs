//! Tool configuration (`vaultnote.toml`).

pub mod settings;

pub use settings::Config;
