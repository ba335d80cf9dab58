use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use provider_settings::{
    try_parse_agent_markdown, AgentDefinition, AgentStamp, EnvConfig, Provider, ProviderSettings,
    SystemPromptConfig,
};
use settings_store::{default_settings_path, SettingsStore};

use crate::cli::{AgentsCommand, Cli, Command, PromptCommand, PromptSetArgs};

/// Executes `cli` against the settings file it resolves to, writing results to `out`.
pub fn run(cli: Cli, env: &EnvConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = settings_path(&cli, env);
    let mut store = SettingsStore::open(&path)
        .with_context(|| format!("failed to open settings at {}", path.display()))?;

    match cli.command {
        Command::Show { provider } => show(store.settings(), provider, out),
        Command::Agents(command) => agents(&mut store, command, env, out),
        Command::Prompt(command) => prompt(&mut store, command, out),
    }
}

/// `--settings`, then `PROVIDER_SETTINGS_PATH`, then the home directory default.
#[must_use]
pub fn settings_path(cli: &Cli, env: &EnvConfig) -> PathBuf {
    match &cli.settings {
        Some(path) => path.clone(),
        None => default_settings_path(env.settings_path.as_deref()),
    }
}

fn show(
    settings: &ProviderSettings,
    provider: Option<Provider>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let rendered = match provider {
        Some(provider) => serde_json::to_string_pretty(&settings.provider_config(provider))?,
        None => serde_json::to_string_pretty(settings)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn agents(
    store: &mut SettingsStore,
    command: AgentsCommand,
    env: &EnvConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        AgentsCommand::List { provider } => {
            let settings = store.settings();
            let listed: Vec<&AgentDefinition> = match provider {
                Some(provider) => settings.agents_for_provider(provider),
                None => settings.all_agents().collect(),
            };
            for agent in listed {
                write_agent_line(agent, out)?;
            }
        }
        AgentsCommand::Import { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let draft = try_parse_agent_markdown(&content, env.max_import_bytes)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            let stamp = AgentStamp::generate();
            let agent_id = stamp.id.clone();
            let imported = store.settings().import_agent_draft(draft, stamp)?;
            store.replace(imported)?;
            tracing::info!(%agent_id, file = %file.display(), "imported agent");
            writeln!(out, "{agent_id}")?;
        }
        AgentsCommand::Delete { id } => {
            require_agent(store.settings(), &id)?;
            store.update(|settings| settings.delete_agent(&id))?;
            writeln!(out, "deleted {id}")?;
        }
        AgentsCommand::Enable { provider, id } => {
            let agent = require_agent(store.settings(), &id)?;
            if !agent.provider.is_eligible_for(provider) {
                bail!("agent {id} targets {}, not {provider}", agent.provider);
            }
            store.update(|settings| settings.enable_agent(provider, &id))?;
            writeln!(out, "enabled {id} for {provider}")?;
        }
        AgentsCommand::Disable { provider, id } => {
            store.update(|settings| settings.disable_agent(provider, &id))?;
            writeln!(out, "disabled {id} for {provider}")?;
        }
        AgentsCommand::SeedBuiltins => {
            let before = store.settings().agents.len();
            let added = store.update(ProviderSettings::seed_builtin_agents)?.agents.len() - before;
            writeln!(out, "added {added} built-in agents")?;
        }
    }
    Ok(())
}

fn prompt(
    store: &mut SettingsStore,
    command: PromptCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        PromptCommand::Set(PromptSetArgs {
            scope,
            mode,
            content,
            disabled,
        }) => {
            let mut config = SystemPromptConfig::new(mode, content);
            if disabled {
                config = config.disabled();
            }
            store.update(|settings| settings.with_system_prompt(scope, Some(config)))?;
        }
        PromptCommand::Clear { scope } => {
            store.update(|settings| settings.with_system_prompt(scope, None))?;
        }
        PromptCommand::Show { provider, agent } => {
            let settings = store.settings();
            let agent = match agent.as_deref() {
                Some(id) => Some(require_agent(settings, id)?),
                None => settings.default_agent(provider),
            };
            writeln!(out, "{}", settings.effective_system_prompt(provider, agent))?;
        }
    }
    Ok(())
}

fn require_agent<'a>(
    settings: &'a ProviderSettings,
    agent_id: &str,
) -> anyhow::Result<&'a AgentDefinition> {
    match settings.agent(agent_id) {
        Some(agent) => Ok(agent),
        None => bail!("no agent with id {agent_id}"),
    }
}

fn write_agent_line(agent: &AgentDefinition, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}",
        agent.id,
        agent.name,
        agent.provider,
        agent.source,
        agent.category.as_deref().unwrap_or("-"),
    )?;
    Ok(())
}
