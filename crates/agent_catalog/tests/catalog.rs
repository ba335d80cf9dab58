use std::cell::RefCell;
use std::collections::HashMap;

use agent_catalog::{
    group_by_category, import_catalog_entry, search_entries, Catalog, CatalogEntry,
    CatalogError, CatalogSource, CatalogTransport,
};
use pretty_assertions::assert_eq;
use provider_settings::{AgentImportError, AgentStamp, Provider, ProviderSettings};
use serde_json::json;
use url::Url;

const API: &str = "https://api.github.com/repos/VoltAgent/awesome-claude-code-subagents/contents";
const RAW: &str = "https://raw.githubusercontent.com/VoltAgent/awesome-claude-code-subagents/main";

#[derive(Default)]
struct MemoryTransport {
    responses: HashMap<String, Result<String, String>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryTransport {
    fn respond(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    fn fail(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Err(message.into()));
        self
    }
}

impl CatalogTransport for MemoryTransport {
    fn get_text(&self, url: &Url) -> Result<String, CatalogError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(CatalogError::transport(url.as_str(), message.clone())),
            None => Err(CatalogError::transport(url.as_str(), "404 Not Found")),
        }
    }
}

fn listing(entries: &[(&str, &str, &str)]) -> String {
    json!(entries
        .iter()
        .map(|(name, path, kind)| json!({ "name": name, "path": path, "type": kind }))
        .collect::<Vec<_>>())
    .to_string()
}

fn catalog_transport() -> MemoryTransport {
    MemoryTransport::default()
        .respond(
            format!("{API}/categories"),
            listing(&[
                ("01-core", "categories/01-core", "dir"),
                ("02-lang", "categories/02-lang", "dir"),
                ("03-broken", "categories/03-broken", "dir"),
                ("README.md", "categories/README.md", "file"),
            ]),
        )
        .respond(
            format!("{API}/categories/01-core"),
            listing(&[
                ("api-designer.md", "categories/01-core/api-designer.md", "file"),
                ("notes.txt", "categories/01-core/notes.txt", "file"),
            ]),
        )
        .respond(
            format!("{API}/categories/02-lang"),
            listing(&[
                ("rust-pro.md", "categories/02-lang/rust-pro.md", "file"),
                ("nested", "categories/02-lang/nested", "dir"),
            ]),
        )
        .fail(format!("{API}/categories/03-broken"), "500 Internal Server Error")
}

#[test]
fn list_walks_categories_and_skips_failures() {
    let transport = catalog_transport();

    let entries = Catalog::default()
        .list(&transport)
        .expect("listing should succeed");

    assert_eq!(
        entries,
        vec![
            CatalogEntry {
                name: "api-designer".to_string(),
                path: "categories/01-core/api-designer.md".to_string(),
                category: Some("01-core".to_string()),
                url: format!("{RAW}/categories/01-core/api-designer.md"),
            },
            CatalogEntry {
                name: "rust-pro".to_string(),
                path: "categories/02-lang/rust-pro.md".to_string(),
                category: Some("02-lang".to_string()),
                url: format!("{RAW}/categories/02-lang/rust-pro.md"),
            },
        ]
    );
    assert_eq!(transport.requests.borrow().len(), 4);
}

#[test]
fn list_fails_when_index_is_unavailable() {
    let transport = MemoryTransport::default();

    let error = Catalog::default()
        .list(&transport)
        .expect_err("missing index must fail");

    assert!(matches!(error, CatalogError::Transport { .. }));
}

#[test]
fn list_uses_custom_source() {
    let transport = MemoryTransport::default()
        .respond(
            "https://ghe.example/api/repos/acme/agents/contents/categories",
            listing(&[("ops", "categories/ops", "dir")]),
        )
        .respond(
            "https://ghe.example/api/repos/acme/agents/contents/categories/ops",
            listing(&[("sre.md", "categories/ops/sre.md", "file")]),
        );
    let catalog = Catalog::new(
        CatalogSource::new("acme/agents")
            .with_api_base("https://ghe.example/api")
            .with_raw_base("https://ghe.example/raw")
            .with_branch("trunk"),
    );

    let entries = catalog.list(&transport).expect("listing should succeed");

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].url,
        "https://ghe.example/raw/acme/agents/trunk/categories/ops/sre.md"
    );
}

#[test]
fn search_and_group_listed_entries() {
    let entries = Catalog::default()
        .list(&catalog_transport())
        .expect("listing should succeed");

    let found = search_entries(&entries, "RUST");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "rust-pro");

    let grouped = group_by_category(&entries);
    assert_eq!(
        grouped.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["01-core", "02-lang"]
    );
}

#[test]
fn fetch_and_import_uses_entry_category_fallback() {
    let entry = CatalogEntry {
        name: "rust-pro".to_string(),
        path: "categories/02-lang/rust-pro.md".to_string(),
        category: Some("02-lang".to_string()),
        url: format!("{RAW}/categories/02-lang/rust-pro.md"),
    };
    let transport = MemoryTransport::default().respond(
        entry.url.clone(),
        "---\nname: rust-pro\ndescription: Rust expert\ntools: Read, Edit\nprovider: claude\n---\nYou write Rust.\n",
    );
    let catalog = Catalog::default();

    let content = catalog
        .fetch_document(&transport, &entry)
        .expect("document should download");
    let settings = import_catalog_entry(
        &ProviderSettings::default(),
        &entry,
        &content,
        AgentStamp::new("rust1", 9),
    )
    .expect("import should succeed");

    let agent = settings.agent("rust1").expect("agent should be imported");
    assert_eq!(agent.category.as_deref(), Some("02-lang"));
    assert_eq!(agent.tools, vec!["Read".to_string(), "Edit".to_string()]);
    assert_eq!(
        settings.provider_config(Provider::Claude).enabled_agents,
        vec!["rust1".to_string()]
    );
}

#[test]
fn import_surfaces_validation_errors() {
    let entry = CatalogEntry {
        name: "empty".to_string(),
        path: "categories/x/empty.md".to_string(),
        category: None,
        url: format!("{RAW}/categories/x/empty.md"),
    };

    let error = import_catalog_entry(
        &ProviderSettings::default(),
        &entry,
        "---\nname: empty\n---\n",
        AgentStamp::new("e1", 1),
    )
    .expect_err("empty prompt must fail");

    assert!(matches!(
        error,
        CatalogError::Import(AgentImportError::Invalid { .. })
    ));
}
