//! End-to-end test over a catalog on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use cdocs_config::Config;
use cdocs_content::MemoryIndex;
use cdocs_site::{AdjacentPage, CatalogSite, PathLayout, SiteError, VersionMode};
use cdocs_storage::FsSource;
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
[content]
index = "index.json"

[[sidebar]]
label = "Introduction"
slug = "docs/intro"

[[sidebar]]
label = "Guides"
autogenerated = { directory = "guides" }

[[sidebar]]
label = "Reference"
[[sidebar.items]]
label = "API"
slug = "/reference/api"
"#;

const INDEX: &str = r#"{
    "customPages": [
        {"id": "docs/guides/getting-started", "data": {"title": "Getting started"}},
        {"id": "guides/custom", "data": {"title": "Custom slug", "slug": "guides/custom-page"}}
    ],
    "domains": [
        {"id": "Orders/index.mdx", "filePath": "domains/Orders/index.mdx",
         "data": {"id": "Orders", "name": "Orders", "version": "1.0.0",
                  "services": [{"id": "OrdersService"}]}},
        {"id": "Billing/index.mdx", "filePath": "domains/Billing/index.mdx",
         "data": {"id": "Billing", "name": "billing", "version": "0.1.0", "hidden": true}}
    ],
    "services": [
        {"id": "OrdersService", "data": {"version": "2.1.0", "sends": [{"id": "OrderPlaced"}]}}
    ],
    "events": [
        {"id": "OrderPlaced", "data": {"version": "1.0.0"}}
    ]
}"#;

fn write_catalog(root: &Path) {
    let guides = root.join("docs").join("guides");
    fs::create_dir_all(&guides).unwrap();
    fs::write(
        guides.join("getting-started.mdx"),
        "---\ntitle: Getting started\n---\n# Getting started\n",
    )
    .unwrap();
    fs::write(guides.join("custom.mdx"), "---\nslug: guides/custom\n---\n").unwrap();
    fs::write(guides.join("draft.mdx"), "---\ntitle: Draft\n---\n").unwrap();
    fs::write(guides.join(".hidden.mdx"), "").unwrap();
    fs::write(guides.join("notes.txt"), "not a page").unwrap();
    fs::write(root.join("index.json"), INDEX).unwrap();
}

fn create_site(root: &Path) -> CatalogSite {
    let config = Config::from_toml_str(CONFIG, root).unwrap();
    let index_path = config.content_resolved.index_path.as_deref().unwrap();
    let index = MemoryIndex::load(index_path).unwrap();
    let source = FsSource::with_patterns(
        config.docs_resolved.docs_dir(),
        &config.docs_resolved.patterns,
    )
    .unwrap();

    CatalogSite::new(
        Arc::new(source),
        Arc::new(index),
        config.sidebar,
        PathLayout::new(&config.docs_resolved.project_dir, &config.docs_resolved.site_dir),
    )
}

#[test]
fn test_navigation_from_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    let site = create_site(temp_dir.path());

    let tree = site.navigation_tree().unwrap();

    // Alphabetical listing: custom, draft, getting-started
    let guides: Vec<_> = tree.items[1]
        .items
        .iter()
        .map(|item| (item.label.as_str(), item.slug.as_deref()))
        .collect();
    assert_eq!(
        guides,
        vec![
            ("Custom slug", Some("guides/custom-page")),
            ("Getting started", Some("/guides/getting-started")),
        ]
    );
    assert_eq!(tree.dropped, vec!["docs/guides/draft"]);
}

#[test]
fn test_adjacent_pages_from_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    let site = create_site(temp_dir.path());

    let adjacent = site.adjacent_pages("docs/guides/getting-started").unwrap();

    assert_eq!(
        adjacent.prev,
        Some(AdjacentPage::new("Custom slug", "guides/custom-page"))
    );
    assert_eq!(
        adjacent.next,
        Some(AdjacentPage::new("API", "/reference/api"))
    );
}

#[test]
fn test_domains_and_messages_from_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    let site = create_site(temp_dir.path());

    let domains = site.domains(VersionMode::CurrentOnly).unwrap();

    assert_eq!(domains.len(), 1);
    let orders = &domains[0];
    assert_eq!(orders.display_name(), "Orders");
    assert_eq!(orders.services[0].id, "OrdersService");
    assert_eq!(
        orders.catalog.absolute_file_path,
        temp_dir.path().join("domains/Orders/index.md")
    );

    let messages = site.messages_for_domain(orders).unwrap();
    assert_eq!(messages.sends[0].id, "OrderPlaced");
    assert!(messages.receives.is_empty());
}

#[test]
fn test_missing_autogenerated_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("index.json"), "{}").unwrap();
    let site = create_site(temp_dir.path());

    let err = site.navigation_tree().unwrap_err();

    assert!(matches!(err, SiteError::Source(_)));
}
