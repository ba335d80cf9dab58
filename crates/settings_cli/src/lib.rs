//! `provider-settings`: a terminal front end for the persisted provider settings.

pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::{run, settings_path};
