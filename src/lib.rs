//! Provider and agent settings for coding-agent clients.
//!
//! [`ProviderSettings`] is the aggregate root: global fallbacks, one optional
//! [`ProviderConfig`] per [`Provider`], and every [`AgentDefinition`] by id.
//!
//! # Lifecycle
//! - Load untrusted persisted data with [`ProviderSettings::parse`]. Malformed
//!   input never errors; it degrades to defaults and logs a warning.
//! - Read through the resolution queries (`provider_config`,
//!   `system_prompt_config`, `agents_for_provider`, `default_agent`, ...).
//! - Write through pure transformations (`apply`, `add_agent`, `update_agent`,
//!   `delete_agent`, ...) which return a new aggregate and leave the old one intact.
//! - Persisting the result is the caller's job (see the `settings_store` crate).
//!
//! # Replace-not-merge
//! A provider entry in a [`ProviderSettingsDelta`] replaces that provider's
//! whole config. Start from [`ProviderSettings::provider_config`] and modify it
//! when only one field should change.
//!
//! # Concurrency
//! Everything here is synchronous and side-effect free apart from logging.
//! Read-modify-write cycles against shared storage must be serialized by the
//! caller; the last write wins.

pub mod builtin;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod merge;
pub mod mutate;
pub mod parse;
pub mod prompt;
pub mod query;
pub mod types;
pub mod validate;

pub use builtin::builtin_agents;
pub use config::EnvConfig;
pub use error::{AgentImportError, SettingsParseError};
pub use import::{
    parse_agent_markdown, parse_agent_markdown_with_limit, try_parse_agent_markdown,
    DEFAULT_MAX_IMPORT_BYTES,
};
pub use merge::{GlobalDelta, ProviderSettingsDelta};
pub use mutate::{now_millis, AgentStamp, AgentUpdate};
pub use types::{
    AgentDefinition, AgentDraft, AgentProvider, AgentSource, GlobalConfig, Provider,
    ProviderConfig, ProviderConfigs, ProviderSettings, SettingsScope, SystemPromptConfig,
    SystemPromptMode, UnknownProvider,
};
pub use validate::{validate_agent, AgentValidation};
