use serde::Deserialize;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentsKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One item of a GitHub contents-API directory listing. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentsEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentsKind,
}

impl ContentsEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == ContentsKind::Dir
    }

    /// The agent name when this is a markdown file.
    #[must_use]
    pub fn markdown_stem(&self) -> Option<&str> {
        if self.kind != ContentsKind::File {
            return None;
        }
        self.name.strip_suffix(".md").filter(|stem| !stem.is_empty())
    }
}

/// Decodes a contents-API listing fetched from `url`.
pub fn parse_contents_listing(url: &str, body: &str) -> Result<Vec<ContentsEntry>, CatalogError> {
    serde_json::from_str(body).map_err(|source| CatalogError::Listing {
        url: url.to_string(),
        source,
    })
}
