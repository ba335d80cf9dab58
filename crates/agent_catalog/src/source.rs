use url::Url;

use crate::error::CatalogError;

pub const DEFAULT_CATALOG_REPO: &str = "VoltAgent/awesome-claude-code-subagents";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_BRANCH: &str = "main";
pub const CATEGORIES_PATH: &str = "categories";

/// Location of a catalog repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    /// `owner/name` of the GitHub repository.
    pub repo: String,
    /// Base URL of the GitHub REST API.
    pub api_base: String,
    /// Base URL for raw file downloads.
    pub raw_base: String,
    pub branch: String,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self {
            repo: DEFAULT_CATALOG_REPO.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl CatalogSource {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_raw_base(mut self, raw_base: impl Into<String>) -> Self {
        self.raw_base = raw_base.into();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// `{api_base}/repos/{repo}/contents/{path}`
    pub fn contents_url(&self, path: &str) -> Result<Url, CatalogError> {
        extend_url(
            &self.api_base,
            ["repos"]
                .into_iter()
                .chain(split_path(&self.repo))
                .chain(["contents"])
                .chain(split_path(path)),
        )
    }

    /// `{raw_base}/{repo}/{branch}/{path}`
    pub fn raw_file_url(&self, path: &str) -> Result<Url, CatalogError> {
        extend_url(
            &self.raw_base,
            split_path(&self.repo)
                .chain(split_path(&self.branch))
                .chain(split_path(path)),
        )
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn extend_url<'a>(
    base: &str,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, CatalogError> {
    let mut url = Url::parse(base.trim())?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| CatalogError::CannotBeABase {
                url: base.to_string(),
            })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_url_for_default_repo() {
        let url = CatalogSource::default()
            .contents_url(CATEGORIES_PATH)
            .expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/VoltAgent/awesome-claude-code-subagents/contents/categories"
        );
    }

    #[test]
    fn raw_url_tolerates_trailing_slashes() {
        let url = CatalogSource::new("acme/agents")
            .with_raw_base("https://mirror.example/raw/")
            .with_branch("dev")
            .raw_file_url("categories/01-core/api-designer.md")
            .expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://mirror.example/raw/acme/agents/dev/categories/01-core/api-designer.md"
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        let url = CatalogSource::default()
            .contents_url("categories/with space")
            .expect("url should build");
        assert!(url.as_str().ends_with("/contents/categories/with%20space"));
    }

    #[test]
    fn non_hierarchical_base_is_rejected() {
        let error = CatalogSource::default()
            .with_api_base("mailto:someone@example.com")
            .contents_url("x")
            .expect_err("mailto cannot be a base");
        assert!(matches!(error, CatalogError::CannotBeABase { .. }));
    }
}
