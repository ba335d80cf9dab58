//! File persistence for [`provider_settings::ProviderSettings`].
//!
//! Loading follows the settings model's soft-failure policy: a missing file or a
//! corrupted blob yields defaults. Saving is atomic (write to a sibling temp file,
//! then rename). There is no versioning; the last writer wins.

mod error;
mod paths;
mod store;

pub use error::SettingsStoreError;
pub use paths::{default_settings_path, settings_file, settings_root, SETTINGS_FILE_NAME};
pub use store::SettingsStore;
