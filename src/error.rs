use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsParseError {
    #[error("provider settings are not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("provider settings do not match the expected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentImportError {
    #[error("agent document is {len} bytes, larger than the {limit} byte import limit")]
    DocumentTooLarge { len: usize, limit: usize },

    #[error("agent document could not be parsed")]
    Unparseable,

    #[error("invalid agent: {}", errors.join(", "))]
    Invalid { errors: Vec<String> },
}
