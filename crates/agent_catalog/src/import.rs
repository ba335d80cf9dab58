use provider_settings::{parse_agent_markdown, AgentImportError, AgentStamp, ProviderSettings};

use crate::catalog::CatalogEntry;
use crate::error::CatalogError;

/// Imports the fetched `content` of `entry` into `settings`.
///
/// The entry's category fills in for documents whose frontmatter has none.
pub fn import_catalog_entry(
    settings: &ProviderSettings,
    entry: &CatalogEntry,
    content: &str,
    stamp: AgentStamp,
) -> Result<ProviderSettings, CatalogError> {
    let mut draft = parse_agent_markdown(content).ok_or(AgentImportError::Unparseable)?;
    if draft.category.is_none() {
        draft.category = entry.category.clone();
    }

    let imported = settings.import_agent_draft(draft, stamp)?;
    tracing::info!(agent = %entry.name, url = %entry.url, "imported catalog agent");
    Ok(imported)
}
