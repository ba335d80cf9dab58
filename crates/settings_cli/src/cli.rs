use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use provider_settings::{Provider, SettingsScope, SystemPromptMode};

#[derive(Debug, Parser)]
#[command(name = "provider-settings")]
#[command(about = "Inspect and edit provider and agent settings")]
pub struct Cli {
    /// Settings file (default: $PROVIDER_SETTINGS_PATH or ~/.agent/settings/provider-settings.json)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the stored settings, or one provider's resolved config
    Show {
        #[arg(long)]
        provider: Option<Provider>,
    },

    /// Manage agent definitions
    #[command(subcommand)]
    Agents(AgentsCommand),

    /// Manage system prompt overrides
    #[command(subcommand)]
    Prompt(PromptCommand),
}

#[derive(Debug, Subcommand)]
pub enum AgentsCommand {
    /// List all agents, or the agents enabled for a provider
    List {
        #[arg(long)]
        provider: Option<Provider>,
    },

    /// Import a markdown agent document
    Import { file: PathBuf },

    /// Delete an agent and every reference to it
    Delete { id: String },

    /// Enable an agent for a provider
    Enable { provider: Provider, id: String },

    /// Disable an agent for a provider
    Disable { provider: Provider, id: String },

    /// Add the built-in agent presets that are missing
    SeedBuiltins,
}

#[derive(Debug, Subcommand)]
pub enum PromptCommand {
    /// Set the override for `global` or a provider
    Set(PromptSetArgs),

    /// Remove the override for `global` or a provider
    Clear { scope: SettingsScope },

    /// Print the effective system prompt for a provider
    Show {
        provider: Provider,
        /// Agent to combine with the override (default: the provider's default agent)
        #[arg(long)]
        agent: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct PromptSetArgs {
    pub scope: SettingsScope,

    #[arg(long, default_value = "append")]
    pub mode: SystemPromptMode,

    #[arg(long)]
    pub content: String,

    /// Store the override without applying it
    #[arg(long)]
    pub disabled: bool,
}
