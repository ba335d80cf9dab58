use time::OffsetDateTime;
use uuid::Uuid;

use crate::merge::ProviderSettingsDelta;
use crate::types::{
    AgentDefinition, AgentDraft, AgentProvider, Provider, ProviderConfig, ProviderSettings,
    SettingsScope, SystemPromptConfig,
};

/// Current time as epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// System-assigned identity for a new agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStamp {
    pub id: String,
    pub now: i64,
}

impl AgentStamp {
    #[must_use]
    pub fn new(id: impl Into<String>, now: i64) -> Self {
        Self { id: id.into(), now }
    }

    /// A fresh `agent_<uuid>` id stamped with the current time.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            id: format!("agent_{}", Uuid::new_v4().simple()),
            now: now_millis(),
        }
    }
}

/// Partial update for an existing agent. `id`, `created_at` and `source` are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tools: Option<Vec<String>>,
    pub system_prompt: Option<String>,
    pub provider: Option<AgentProvider>,
    pub category: Option<Option<String>>,
    /// Overrides the bump to "now".
    pub updated_at: Option<i64>,
}

impl AgentUpdate {
    /// Every editable field taken from `draft`, as an editor save does.
    #[must_use]
    pub fn from_draft(draft: AgentDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            tools: Some(draft.tools),
            system_prompt: Some(draft.system_prompt),
            provider: Some(draft.provider),
            category: Some(draft.category),
            updated_at: None,
        }
    }

    fn apply_to(self, agent: &mut AgentDefinition, now: i64) {
        if let Some(name) = self.name {
            agent.name = name;
        }
        if let Some(description) = self.description {
            agent.description = description;
        }
        if let Some(tools) = self.tools {
            agent.tools = tools;
        }
        if let Some(system_prompt) = self.system_prompt {
            agent.system_prompt = system_prompt;
        }
        if let Some(provider) = self.provider {
            agent.provider = provider;
        }
        if let Some(category) = self.category {
            agent.category = category;
        }
        agent.updated_at = self.updated_at.unwrap_or(now);
    }
}

impl ProviderSettings {
    /// Inserts `draft` under a generated id. The agent is not enabled anywhere.
    #[must_use]
    pub fn add_agent(&self, draft: AgentDraft) -> Self {
        self.add_agent_with(draft, AgentStamp::generate())
    }

    /// Inserts `draft` with a caller-chosen stamp, so the caller knows the new id.
    #[must_use]
    pub fn add_agent_with(&self, draft: AgentDraft, stamp: AgentStamp) -> Self {
        tracing::debug!(agent_id = %stamp.id, name = %draft.name, "adding agent");
        let agent = AgentDefinition {
            id: stamp.id,
            name: draft.name,
            description: draft.description,
            tools: draft.tools,
            system_prompt: draft.system_prompt,
            source: draft.source,
            provider: draft.provider,
            category: draft.category,
            created_at: stamp.now,
            updated_at: stamp.now,
        };
        self.apply(ProviderSettingsDelta::new().agent(agent))
    }

    /// Applies `update` to agent `agent_id`. Unknown ids leave the settings unchanged.
    #[must_use]
    pub fn update_agent(&self, agent_id: &str, update: AgentUpdate) -> Self {
        let Some(existing) = self.agents.get(agent_id) else {
            tracing::debug!(agent_id, "ignoring update for unknown agent");
            return self.clone();
        };

        let mut agent = existing.clone();
        update.apply_to(&mut agent, now_millis());
        self.apply(ProviderSettingsDelta::new().agent(agent))
    }

    /// Removes the agent and every reference to it.
    ///
    /// A provider config emptied by the removal collapses back to unset.
    #[must_use]
    pub fn delete_agent(&self, agent_id: &str) -> Self {
        let mut next = self.clone();
        if next.agents.remove(agent_id).is_some() {
            tracing::debug!(agent_id, "deleted agent");
        }

        for provider in Provider::ALL {
            let slot = next.providers.slot_mut(provider);
            if let Some(config) = slot.take() {
                *slot = remove_agent_reference(config, agent_id);
            }
        }

        if next.global.default_agent_id.as_deref() == Some(agent_id) {
            next.global.default_agent_id = None;
        }

        next
    }

    /// Appends `agent_id` to the provider's enabled list unless already present.
    #[must_use]
    pub fn enable_agent(&self, provider: Provider, agent_id: &str) -> Self {
        let mut config = self.provider_config(provider).into_owned();
        if config.enabled_agents.iter().any(|id| id == agent_id) {
            return self.clone();
        }

        config.enabled_agents.push(agent_id.to_string());
        self.apply(ProviderSettingsDelta::new().provider(provider, config))
    }

    /// Removes `agent_id` from the provider's enabled list and default.
    #[must_use]
    pub fn disable_agent(&self, provider: Provider, agent_id: &str) -> Self {
        let Some(config) = self.providers.get(provider) else {
            return self.clone();
        };

        let mut next = self.clone();
        next.providers
            .set(provider, remove_agent_reference(config.clone(), agent_id));
        next
    }

    /// Sets or clears the system prompt override at `scope`.
    #[must_use]
    pub fn with_system_prompt(
        &self,
        scope: SettingsScope,
        system_prompt: Option<SystemPromptConfig>,
    ) -> Self {
        match scope {
            SettingsScope::Global => {
                self.apply(ProviderSettingsDelta::new().global_system_prompt(system_prompt))
            }
            SettingsScope::Provider(provider) => {
                let mut config = self.provider_config(provider).into_owned();
                config.system_prompt = system_prompt;
                self.apply(provider_delta(provider, config))
            }
        }
    }

    /// Sets or clears the default agent at `scope`.
    #[must_use]
    pub fn with_default_agent(&self, scope: SettingsScope, agent_id: Option<String>) -> Self {
        match scope {
            SettingsScope::Global => {
                self.apply(ProviderSettingsDelta::new().global_default_agent(agent_id))
            }
            SettingsScope::Provider(provider) => {
                let mut config = self.provider_config(provider).into_owned();
                config.default_agent_id = agent_id;
                self.apply(provider_delta(provider, config))
            }
        }
    }
}

fn provider_delta(provider: Provider, config: ProviderConfig) -> ProviderSettingsDelta {
    if config.is_empty() {
        ProviderSettingsDelta::new().clear_provider(provider)
    } else {
        ProviderSettingsDelta::new().provider(provider, config)
    }
}

// Configs that did not reference the agent are returned untouched.
fn remove_agent_reference(mut config: ProviderConfig, agent_id: &str) -> Option<ProviderConfig> {
    let listed = config.enabled_agents.len();
    config.enabled_agents.retain(|id| id != agent_id);
    let mut touched = config.enabled_agents.len() != listed;

    if config.default_agent_id.as_deref() == Some(agent_id) {
        config.default_agent_id = None;
        touched = true;
    }

    if touched && config.is_empty() {
        None
    } else {
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentSource;

    fn draft(name: &str) -> AgentDraft {
        AgentDraft::new(name, "desc", "prompt", AgentSource::Custom)
    }

    #[test]
    fn generated_stamps_are_unique() {
        let first = AgentStamp::generate();
        let second = AgentStamp::generate();
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("agent_"));
    }

    #[test]
    fn update_respects_explicit_updated_at() {
        let settings =
            ProviderSettings::default().add_agent_with(draft("a"), AgentStamp::new("a1", 10));

        let updated = settings.update_agent(
            "a1",
            AgentUpdate {
                name: Some("renamed".into()),
                updated_at: Some(42),
                ..AgentUpdate::default()
            },
        );

        let agent = updated.agent("a1").expect("agent should exist");
        assert_eq!(agent.name, "renamed");
        assert_eq!(agent.created_at, 10);
        assert_eq!(agent.updated_at, 42);
        assert_eq!(agent.source, AgentSource::Custom);
    }

    #[test]
    fn update_bumps_updated_at_by_default() {
        let settings =
            ProviderSettings::default().add_agent_with(draft("a"), AgentStamp::new("a1", 10));

        let updated = settings.update_agent("a1", AgentUpdate::default());

        assert!(updated.agent("a1").expect("agent should exist").updated_at > 10);
    }

    #[test]
    fn enable_is_idempotent() {
        let settings = ProviderSettings::default()
            .enable_agent(Provider::Claude, "a1")
            .enable_agent(Provider::Claude, "a1");

        assert_eq!(
            settings.provider_config(Provider::Claude).enabled_agents,
            vec!["a1".to_string()]
        );
    }

    #[test]
    fn disable_collapses_emptied_config() {
        let settings = ProviderSettings::default()
            .enable_agent(Provider::Cursor, "a1")
            .disable_agent(Provider::Cursor, "a1");

        assert!(settings.providers.cursor.is_none());
    }

    #[test]
    fn clearing_last_provider_field_unsets_the_provider() {
        let prompt = SystemPromptConfig::new(crate::types::SystemPromptMode::Replace, "x");
        let settings = ProviderSettings::default()
            .with_system_prompt(SettingsScope::Provider(Provider::Codex), Some(prompt))
            .with_system_prompt(SettingsScope::Provider(Provider::Codex), None);

        assert!(settings.providers.codex.is_none());
    }
}
