use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use provider_settings::ProviderSettings;

use crate::error::SettingsStoreError;
use crate::paths::temp_path_for;

/// Settings loaded from, and saved back to, one JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    pub(crate) path: PathBuf,
    pub(crate) settings: ProviderSettings,
}

impl SettingsStore {
    /// Loads `path`. Missing or corrupted files yield default settings.
    pub fn open(path: &Path) -> Result<Self, SettingsStoreError> {
        let path = path.to_path_buf();
        let settings = read_settings(&path)?;
        Ok(Self { path, settings })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Re-reads the file, discarding the in-memory value.
    pub fn reload(&mut self) -> Result<&ProviderSettings, SettingsStoreError> {
        self.settings = read_settings(&self.path)?;
        Ok(&self.settings)
    }

    /// Replaces the settings and persists them.
    pub fn replace(&mut self, settings: ProviderSettings) -> Result<(), SettingsStoreError> {
        write_settings(&self.path, &settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Applies `change` to the current settings and persists the result.
    ///
    /// The in-memory value is only swapped once the write succeeds.
    pub fn update<F>(&mut self, change: F) -> Result<&ProviderSettings, SettingsStoreError>
    where
        F: FnOnce(&ProviderSettings) -> ProviderSettings,
    {
        let next = change(&self.settings);
        self.replace(next)?;
        Ok(&self.settings)
    }

    pub fn save(&self) -> Result<(), SettingsStoreError> {
        write_settings(&self.path, &self.settings)
    }
}

pub(crate) fn read_settings(path: &Path) -> Result<ProviderSettings, SettingsStoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(ProviderSettings::parse_str(&text)),
        Err(source) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no provider settings file; using defaults");
            Ok(ProviderSettings::default())
        }
        Err(source) if source.kind() == ErrorKind::InvalidData => {
            tracing::warn!(
                path = %path.display(),
                error = %source,
                "provider settings file is not UTF-8; using defaults"
            );
            Ok(ProviderSettings::default())
        }
        Err(source) => Err(SettingsStoreError::io(
            "reading provider settings",
            path,
            source,
        )),
    }
}

pub(crate) fn write_settings(
    path: &Path,
    settings: &ProviderSettings,
) -> Result<(), SettingsStoreError> {
    let temp_path = temp_path_for(path).ok_or_else(|| SettingsStoreError::InvalidPath {
        path: path.to_path_buf(),
    })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            SettingsStoreError::io("creating settings directory", parent, source)
        })?;
    }

    let mut json = serde_json::to_string_pretty(settings)
        .map_err(|source| SettingsStoreError::json_serialize(path, source))?;
    json.push('\n');

    let mut file = File::create(&temp_path).map_err(|source| {
        SettingsStoreError::io("creating temporary settings file", &temp_path, source)
    })?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|source| {
            SettingsStoreError::io("writing temporary settings file", &temp_path, source)
        })?;
    drop(file);

    fs::rename(&temp_path, path)
        .map_err(|source| SettingsStoreError::io("replacing settings file", path, source))?;
    tracing::debug!(path = %path.display(), agents = settings.agents.len(), "saved provider settings");
    Ok(())
}
