//! Lenient loading of persisted settings.
//!
//! Stored blobs may come from older clients or be partially corrupted. Unknown
//! fields are ignored and omitted sections take their defaults; a blob whose
//! known fields have the wrong shape is discarded in favour of defaults so a
//! broken settings file never blocks startup.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SettingsParseError;
use crate::types::ProviderSettings;

impl ProviderSettings {
    /// Parses an untrusted value, falling back to defaults when it does not fit.
    #[must_use]
    pub fn parse(value: &Value) -> Self {
        Self::try_parse(value).unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to parse provider settings; using defaults");
            Self::default()
        })
    }

    /// Parses raw JSON text with the same fallback policy as [`ProviderSettings::parse`].
    #[must_use]
    pub fn parse_str(text: &str) -> Self {
        Self::try_parse_str(text).unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to parse provider settings; using defaults");
            Self::default()
        })
    }

    pub fn try_parse(value: &Value) -> Result<Self, SettingsParseError> {
        ProviderSettings::deserialize(value).map_err(SettingsParseError::Shape)
    }

    pub fn try_parse_str(text: &str) -> Result<Self, SettingsParseError> {
        let value = serde_json::from_str::<Value>(text).map_err(SettingsParseError::Json)?;
        Self::try_parse(&value)
    }
}
