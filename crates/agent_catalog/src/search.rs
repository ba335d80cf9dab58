use std::collections::BTreeMap;

use crate::catalog::CatalogEntry;

pub const UNCATEGORIZED: &str = "Other";

/// Entries whose name, category or path contains `query`, ignoring case.
///
/// A blank query matches everything.
#[must_use]
pub fn search_entries<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let query = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            query.is_empty()
                || entry.name.to_lowercase().contains(&query)
                || entry
                    .category
                    .as_deref()
                    .is_some_and(|category| category.to_lowercase().contains(&query))
                || entry.path.to_lowercase().contains(&query)
        })
        .collect()
}

/// Groups entries by category, keeping listing order within a group.
#[must_use]
pub fn group_by_category<'a, I>(entries: I) -> BTreeMap<String, Vec<&'a CatalogEntry>>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut grouped: BTreeMap<String, Vec<&CatalogEntry>> = BTreeMap::new();
    for entry in entries {
        let category = entry
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(UNCATEGORIZED);
        grouped.entry(category.to_string()).or_default().push(entry);
    }
    grouped
}
