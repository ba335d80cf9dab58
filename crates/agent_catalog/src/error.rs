use provider_settings::AgentImportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("failed to decode contents listing from {url}: {source}")]
    Listing {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("catalog base URL cannot take path segments: {url}")]
    CannotBeABase { url: String },

    #[error(transparent)]
    Import(#[from] AgentImportError),
}

impl CatalogError {
    #[must_use]
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }
}
