//! Immutable application of partial deltas.
//!
//! `global` merges per field, `providers` merges per provider key with whole-config
//! replacement, and `agents` merges per id. Deltas are trusted in-process values and
//! are not re-validated.

use std::collections::BTreeMap;

use crate::types::{AgentDefinition, Provider, ProviderConfig, ProviderSettings, SystemPromptConfig};

/// Field-level changes to the global config. `Some(None)` clears a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalDelta {
    pub system_prompt: Option<Option<SystemPromptConfig>>,
    pub default_agent_id: Option<Option<String>>,
}

/// A partial update for [`ProviderSettings::apply`].
///
/// A provider entry replaces that provider's entire config: pass the complete
/// [`ProviderConfig`] you want to end up with, not just the changed fields.
/// `None` as the entry value resets the provider to unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettingsDelta {
    pub global: Option<GlobalDelta>,
    pub providers: BTreeMap<Provider, Option<ProviderConfig>>,
    pub agents: BTreeMap<String, AgentDefinition>,
}

impl ProviderSettingsDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn global_system_prompt(mut self, system_prompt: Option<SystemPromptConfig>) -> Self {
        self.global.get_or_insert_with(GlobalDelta::default).system_prompt = Some(system_prompt);
        self
    }

    #[must_use]
    pub fn global_default_agent(mut self, agent_id: Option<String>) -> Self {
        self.global
            .get_or_insert_with(GlobalDelta::default)
            .default_agent_id = Some(agent_id);
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Provider, config: ProviderConfig) -> Self {
        self.providers.insert(provider, Some(config));
        self
    }

    #[must_use]
    pub fn clear_provider(mut self, provider: Provider) -> Self {
        self.providers.insert(provider, None);
        self
    }

    #[must_use]
    pub fn agent(mut self, agent: AgentDefinition) -> Self {
        self.agents.insert(agent.id.clone(), agent);
        self
    }
}

impl ProviderSettings {
    /// Returns a new aggregate with `delta` layered over `self`.
    #[must_use]
    pub fn apply(&self, delta: ProviderSettingsDelta) -> Self {
        let mut merged = self.clone();

        if let Some(global) = delta.global {
            if let Some(system_prompt) = global.system_prompt {
                merged.global.system_prompt = system_prompt;
            }
            if let Some(default_agent_id) = global.default_agent_id {
                merged.global.default_agent_id = default_agent_id;
            }
        }

        for (provider, config) in delta.providers {
            merged.providers.set(provider, config);
        }

        merged.agents.extend(delta.agents);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SystemPromptMode;

    #[test]
    fn untouched_global_fields_survive() {
        let base = ProviderSettings::default()
            .apply(ProviderSettingsDelta::new().global_default_agent(Some("a".into())));
        let prompt = SystemPromptConfig::new(SystemPromptMode::Append, "be brief");

        let merged = base.apply(ProviderSettingsDelta::new().global_system_prompt(Some(prompt.clone())));

        assert_eq!(merged.global.default_agent_id.as_deref(), Some("a"));
        assert_eq!(merged.global.system_prompt, Some(prompt));
    }

    #[test]
    fn clearing_a_provider_resets_it() {
        let base = ProviderSettings::default().apply(ProviderSettingsDelta::new().provider(
            Provider::Gemini,
            ProviderConfig {
                enabled_agents: vec!["a".into()],
                ..ProviderConfig::default()
            },
        ));

        let merged = base.apply(ProviderSettingsDelta::new().clear_provider(Provider::Gemini));

        assert!(merged.providers.gemini.is_none());
        assert!(base.providers.gemini.is_some());
    }
}
