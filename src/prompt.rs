use crate::types::{AgentDefinition, Provider, ProviderSettings, SystemPromptMode};

impl ProviderSettings {
    /// The system prompt a session for `provider` runs with.
    ///
    /// The resolved override is ignored when disabled or blank. `replace` discards
    /// the agent prompt; `append` adds the override after it, separated by a blank line.
    #[must_use]
    pub fn effective_system_prompt(
        &self,
        provider: Provider,
        agent: Option<&AgentDefinition>,
    ) -> String {
        let base = agent.map_or("", |agent| agent.system_prompt.trim());
        let Some(config) = self
            .system_prompt_config(provider)
            .filter(|config| config.enabled && !config.content.trim().is_empty())
        else {
            return base.to_string();
        };

        let content = config.content.trim();
        match config.mode {
            SystemPromptMode::Replace => content.to_string(),
            SystemPromptMode::Append if base.is_empty() => content.to_string(),
            SystemPromptMode::Append => format!("{base}\n\n{content}"),
        }
    }
}
