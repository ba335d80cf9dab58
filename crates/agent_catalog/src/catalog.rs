use serde::Serialize;
use url::Url;

use crate::error::CatalogError;
use crate::listing::parse_contents_listing;
use crate::source::{CatalogSource, CATEGORIES_PATH};

/// Fetches text over whatever transport the host provides.
pub trait CatalogTransport {
    fn get_text(&self, url: &Url) -> Result<String, CatalogError>;
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for &T {
    fn get_text(&self, url: &Url) -> Result<String, CatalogError> {
        (**self).get_text(url)
    }
}

/// An importable agent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub path: String,
    pub category: Option<String>,
    /// Raw download URL of the document.
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    source: CatalogSource,
}

impl Catalog {
    #[must_use]
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Walks every category directory and collects its markdown documents.
    ///
    /// Failing to read the category index is an error. A single category that
    /// cannot be listed is logged and skipped.
    pub fn list<T: CatalogTransport + ?Sized>(
        &self,
        transport: &T,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let index_url = self.source.contents_url(CATEGORIES_PATH)?;
        let index = transport.get_text(&index_url)?;
        let categories = parse_contents_listing(index_url.as_str(), &index)?;

        let mut entries = Vec::new();
        for category in categories.iter().filter(|entry| entry.is_dir()) {
            match self.list_category(transport, &category.name, &category.path) {
                Ok(mut found) => entries.append(&mut found),
                Err(error) => {
                    tracing::warn!(category = %category.name, %error, "skipping catalog category");
                }
            }
        }

        Ok(entries)
    }

    fn list_category<T: CatalogTransport + ?Sized>(
        &self,
        transport: &T,
        category: &str,
        path: &str,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = self.source.contents_url(path)?;
        let body = transport.get_text(&url)?;
        let files = parse_contents_listing(url.as_str(), &body)?;

        files
            .iter()
            .filter_map(|file| file.markdown_stem().map(|stem| (stem, file)))
            .map(|(stem, file)| {
                Ok::<_, CatalogError>(CatalogEntry {
                    name: stem.to_string(),
                    path: file.path.clone(),
                    category: Some(category.to_string()),
                    url: self.source.raw_file_url(&file.path)?.to_string(),
                })
            })
            .collect()
    }

    /// Downloads the markdown document behind `entry`.
    pub fn fetch_document<T: CatalogTransport + ?Sized>(
        &self,
        transport: &T,
        entry: &CatalogEntry,
    ) -> Result<String, CatalogError> {
        let url = Url::parse(&entry.url)?;
        transport.get_text(&url)
    }
}
