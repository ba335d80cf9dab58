use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One of the supported coding-agent backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    Codex,
    Gemini,
    Cursor,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Claude,
        Provider::Codex,
        Provider::Gemini,
        Provider::Cursor,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::Codex => "codex",
            Provider::Gemini => "gemini",
            Provider::Cursor => "cursor",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{0}'; expected one of claude, codex, gemini, cursor")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "claude" => Ok(Provider::Claude),
            "codex" => Ok(Provider::Codex),
            "gemini" => Ok(Provider::Gemini),
            "cursor" => Ok(Provider::Cursor),
            _ => Err(UnknownProvider(value.to_string())),
        }
    }
}

/// Provider affinity declared by an agent: a single provider or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentProvider {
    Claude,
    Codex,
    Gemini,
    Cursor,
    #[default]
    All,
}

impl AgentProvider {
    /// An agent is eligible for `provider` when it targets it exactly or targets `all`.
    #[must_use]
    pub fn is_eligible_for(self, provider: Provider) -> bool {
        match self.provider() {
            None => true,
            Some(target) => target == provider,
        }
    }

    /// The single provider this affinity names, `None` for `all`.
    #[must_use]
    pub fn provider(self) -> Option<Provider> {
        match self {
            AgentProvider::Claude => Some(Provider::Claude),
            AgentProvider::Codex => Some(Provider::Codex),
            AgentProvider::Gemini => Some(Provider::Gemini),
            AgentProvider::Cursor => Some(Provider::Cursor),
            AgentProvider::All => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self.provider() {
            Some(provider) => provider.as_str(),
            None => "all",
        }
    }
}

impl From<Provider> for AgentProvider {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Claude => AgentProvider::Claude,
            Provider::Codex => AgentProvider::Codex,
            Provider::Gemini => AgentProvider::Gemini,
            Provider::Cursor => AgentProvider::Cursor,
        }
    }
}

impl fmt::Display for AgentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentProvider {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(AgentProvider::All);
        }
        value.parse::<Provider>().map(AgentProvider::from)
    }
}

/// Provenance of an agent. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentSource {
    Imported,
    Custom,
    Builtin,
}

impl AgentSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentSource::Imported => "imported",
            AgentSource::Custom => "custom",
            AgentSource::Builtin => "builtin",
        }
    }
}

impl fmt::Display for AgentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemPromptMode {
    #[default]
    Append,
    Replace,
}

impl fmt::Display for SystemPromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemPromptMode::Append => "append",
            SystemPromptMode::Replace => "replace",
        })
    }
}

impl FromStr for SystemPromptMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(SystemPromptMode::Append),
            "replace" => Ok(SystemPromptMode::Replace),
            other => Err(format!(
                "unknown system prompt mode '{other}'; expected append or replace"
            )),
        }
    }
}

/// System prompt override at global or provider level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPromptConfig {
    pub mode: SystemPromptMode,
    pub content: String,
    pub enabled: bool,
}

impl SystemPromptConfig {
    #[must_use]
    pub fn new(mode: SystemPromptMode, content: impl Into<String>) -> Self {
        Self {
            mode,
            content: content.into(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A reusable agent preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tools: Vec<String>,
    pub system_prompt: String,
    pub source: AgentSource,
    pub provider: AgentProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(deserialize_with = "epoch_millis")]
    pub created_at: i64,
    #[serde(deserialize_with = "epoch_millis")]
    pub updated_at: i64,
}

impl AgentDefinition {
    /// Returns the caller-editable part of this definition.
    #[must_use]
    pub fn draft(&self) -> AgentDraft {
        AgentDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            tools: self.tools.clone(),
            system_prompt: self.system_prompt.clone(),
            source: self.source,
            provider: self.provider,
            category: self.category.clone(),
        }
    }
}

/// An agent definition before the system assigns `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDraft {
    pub name: String,
    pub description: String,
    pub tools: Vec<String>,
    pub system_prompt: String,
    pub source: AgentSource,
    pub provider: AgentProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AgentDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
        source: AgentSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tools: Vec::new(),
            system_prompt: system_prompt.into(),
            source,
            provider: AgentProvider::All,
            category: None,
        }
    }

    #[must_use]
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<AgentProvider>) -> Self {
        self.provider = provider.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Per-provider settings. `enabled_agents` is display-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<SystemPromptConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_agent_id: Option<String>,
    pub enabled_agents: Vec<String>,
}

impl ProviderConfig {
    /// No prompt override, no default agent, no enabled agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.system_prompt.is_none()
            && self
                .default_agent_id
                .as_deref()
                .map_or(true, str::is_empty)
            && self.enabled_agents.is_empty()
    }
}

/// Fallbacks used when a provider has no override. Never carries enabled agents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<SystemPromptConfig>,
    pub default_agent_id: Option<String>,
}

/// The four provider slots. `None` means the provider has never been configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfigs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude: Option<ProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codex: Option<ProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<ProviderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<ProviderConfig>,
}

impl ProviderConfigs {
    #[must_use]
    pub fn get(&self, provider: Provider) -> Option<&ProviderConfig> {
        self.slot(provider).as_ref()
    }

    pub fn set(&mut self, provider: Provider, config: Option<ProviderConfig>) {
        *self.slot_mut(provider) = config;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Provider, Option<&ProviderConfig>)> + '_ {
        Provider::ALL
            .into_iter()
            .map(move |provider| (provider, self.get(provider)))
    }

    fn slot(&self, provider: Provider) -> &Option<ProviderConfig> {
        match provider {
            Provider::Claude => &self.claude,
            Provider::Codex => &self.codex,
            Provider::Gemini => &self.gemini,
            Provider::Cursor => &self.cursor,
        }
    }

    pub(crate) fn slot_mut(&mut self, provider: Provider) -> &mut Option<ProviderConfig> {
        match provider {
            Provider::Claude => &mut self.claude,
            Provider::Codex => &mut self.codex,
            Provider::Gemini => &mut self.gemini,
            Provider::Cursor => &mut self.cursor,
        }
    }
}

/// The aggregate root: global fallbacks, per-provider configs and every agent by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub global: GlobalConfig,
    pub providers: ProviderConfigs,
    pub agents: BTreeMap<String, AgentDefinition>,
}

/// Where a system prompt or default agent is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsScope {
    Global,
    Provider(Provider),
}

impl FromStr for SettingsScope {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("global") {
            return Ok(SettingsScope::Global);
        }
        value.parse().map(SettingsScope::Provider)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Millis {
    Int(i64),
    Float(f64),
}

// Older clients stored `Date.now()` results that occasionally round-tripped as floats.
fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Millis::deserialize(deserializer)? {
        Millis::Int(value) => Ok(value),
        Millis::Float(value) if value.is_finite() => Ok(value.trunc() as i64),
        Millis::Float(value) => Err(serde::de::Error::custom(format!(
            "timestamp must be finite, got {value}"
        ))),
    }
}
