use std::path::{Path, PathBuf};

pub const SETTINGS_DIR: [&str; 2] = [".agent", "settings"];
pub const SETTINGS_FILE_NAME: &str = "provider-settings.json";

#[must_use]
pub fn settings_root(base: &Path) -> PathBuf {
    base.join(SETTINGS_DIR[0]).join(SETTINGS_DIR[1])
}

#[must_use]
pub fn settings_file(base: &Path) -> PathBuf {
    settings_root(base).join(SETTINGS_FILE_NAME)
}

/// `override_path` when given, otherwise the settings file under the user's home.
///
/// Falls back to the current directory when no home directory is known.
#[must_use]
pub fn default_settings_path(override_path: Option<&str>) -> PathBuf {
    if let Some(path) = override_path {
        return PathBuf::from(path);
    }

    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    settings_file(&home)
}

pub(crate) fn temp_path_for(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Some(path.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_lives_under_agent_dir() {
        assert_eq!(
            settings_file(Path::new("/home/u")),
            PathBuf::from("/home/u/.agent/settings/provider-settings.json")
        );
    }

    #[test]
    fn override_path_wins() {
        assert_eq!(
            default_settings_path(Some("/tmp/x.json")),
            PathBuf::from("/tmp/x.json")
        );
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path_for(Path::new("/a/b/settings.json")),
            Some(PathBuf::from("/a/b/settings.json.tmp"))
        );
        assert_eq!(temp_path_for(Path::new("/")), None);
    }
}
