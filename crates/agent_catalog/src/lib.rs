//! Catalog of importable agent documents hosted in a GitHub repository.
//!
//! The catalog repository keeps one directory per category under `categories/`,
//! each holding `<agent-name>.md` files in the frontmatter format understood by
//! [`provider_settings::parse_agent_markdown`].
//!
//! This crate builds the GitHub URLs, decodes contents-API listings, walks the
//! category tree and imports fetched documents. It ships no HTTP client: callers
//! provide one through [`CatalogTransport`].

pub mod catalog;
pub mod error;
pub mod import;
pub mod listing;
pub mod search;
pub mod source;

pub use catalog::{Catalog, CatalogEntry, CatalogTransport};
pub use error::CatalogError;
pub use import::import_catalog_entry;
pub use listing::{parse_contents_listing, ContentsEntry, ContentsKind};
pub use search::{group_by_category, search_entries, UNCATEGORIZED};
pub use source::{CatalogSource, DEFAULT_CATALOG_REPO};
