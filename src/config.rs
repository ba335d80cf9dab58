//! Environment configuration.

use std::env;

use crate::import::DEFAULT_MAX_IMPORT_BYTES;

pub const SETTINGS_PATH_ENV_VAR: &str = "PROVIDER_SETTINGS_PATH";
pub const LOG_ENV_VAR: &str = "PROVIDER_SETTINGS_LOG";
pub const DEBUG_ENV_VAR: &str = "PROVIDER_SETTINGS_DEBUG";
pub const MAX_IMPORT_BYTES_ENV_VAR: &str = "PROVIDER_SETTINGS_MAX_IMPORT_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub settings_path: Option<String>,
    pub log_filter: Option<String>,
    pub debug: bool,
    pub max_import_bytes: usize,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            log_filter: None,
            debug: false,
            max_import_bytes: DEFAULT_MAX_IMPORT_BYTES,
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            settings_path: env_string_opt(SETTINGS_PATH_ENV_VAR),
            log_filter: env_string_opt(LOG_ENV_VAR),
            debug: env_flag(DEBUG_ENV_VAR),
            max_import_bytes: env_string_opt(MAX_IMPORT_BYTES_ENV_VAR)
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_MAX_IMPORT_BYTES),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
