use std::borrow::Cow;

use crate::types::{AgentDefinition, Provider, ProviderConfig, ProviderSettings, SystemPromptConfig};

impl ProviderSettings {
    /// The provider's config, or an empty one when the provider is unset.
    #[must_use]
    pub fn provider_config(&self, provider: Provider) -> Cow<'_, ProviderConfig> {
        match self.providers.get(provider) {
            Some(config) => Cow::Borrowed(config),
            None => Cow::Owned(ProviderConfig::default()),
        }
    }

    /// Provider override first, then the global one.
    #[must_use]
    pub fn system_prompt_config(&self, provider: Provider) -> Option<&SystemPromptConfig> {
        self.providers
            .get(provider)
            .and_then(|config| config.system_prompt.as_ref())
            .or(self.global.system_prompt.as_ref())
    }

    /// Enabled agents for `provider` in listed order.
    ///
    /// Ids missing from `agents` and agents no longer eligible for `provider` are
    /// skipped, so the enabled list is only a candidate list.
    #[must_use]
    pub fn agents_for_provider(&self, provider: Provider) -> Vec<&AgentDefinition> {
        let Some(config) = self.providers.get(provider) else {
            return Vec::new();
        };

        config
            .enabled_agents
            .iter()
            .filter_map(|id| self.agents.get(id))
            .filter(|agent| agent.provider.is_eligible_for(provider))
            .collect()
    }

    pub fn all_agents(&self) -> impl Iterator<Item = &AgentDefinition> + '_ {
        self.agents.values()
    }

    #[must_use]
    pub fn agent(&self, agent_id: &str) -> Option<&AgentDefinition> {
        self.agents.get(agent_id)
    }

    /// Provider default id first, then the global one. May dangle.
    #[must_use]
    pub fn default_agent_id(&self, provider: Provider) -> Option<&str> {
        self.providers
            .get(provider)
            .and_then(|config| config.default_agent_id.as_deref())
            .filter(|id| !id.is_empty())
            .or_else(|| {
                self.global
                    .default_agent_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
            })
    }

    /// The default agent for `provider`, if it exists and is eligible.
    #[must_use]
    pub fn default_agent(&self, provider: Provider) -> Option<&AgentDefinition> {
        self.default_agent_id(provider)
            .and_then(|id| self.agents.get(id))
            .filter(|agent| agent.provider.is_eligible_for(provider))
    }
}
