//! Derived file and URL paths of catalog entries.

use std::path::PathBuf;

use cdocs_content::Entry;
use serde::Serialize;

/// Source file name of a catalog item directory.
const INDEX_FILE: &str = "/index.mdx";

/// Directories generated paths are derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathLayout {
    /// Catalog project directory holding the collection sources.
    pub project_dir: PathBuf,
    /// Site directory holding generated content and catalog files.
    pub site_dir: PathBuf,
}

impl PathLayout {
    /// Create a layout.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>, site_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            site_dir: site_dir.into(),
        }
    }

    /// Derive the catalog paths of `entry`, labeled with `kind`.
    #[must_use]
    pub fn catalog_paths(&self, entry: &Entry, kind: &str) -> CatalogPaths {
        let collection = entry.collection.as_str();
        let id = entry.id.as_str();
        let dir_id = id.replacen(INDEX_FILE, "", 1);
        let version = entry.version();
        let public_id = if version.is_empty() {
            id.to_owned()
        } else {
            id.replacen(&format!("-{version}"), "", 1)
        };

        CatalogPaths {
            path: format!("{collection}/{dir_id}"),
            absolute_file_path: self
                .project_dir
                .join(collection)
                .join(id.replacen(INDEX_FILE, "/index.md", 1)),
            content_file_path: self
                .site_dir
                .join("src")
                .join("content")
                .join(collection)
                .join(id),
            file_path: self
                .site_dir
                .join("src")
                .join("catalog-files")
                .join(collection)
                .join(&dir_id),
            public_path: format!("/generated/{collection}/{public_id}"),
            kind: kind.to_owned(),
        }
    }
}

/// File and URL paths derived for a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPaths {
    /// Catalog-relative path (`<collection>/<id without /index.mdx>`).
    pub path: String,
    /// Source file under the project directory.
    pub absolute_file_path: PathBuf,
    /// Content file under the site directory.
    pub content_file_path: PathBuf,
    /// Catalog-files directory under the site directory.
    pub file_path: PathBuf,
    /// Public URL of generated assets.
    pub public_path: String,
    /// Entry kind (e.g. `domain`).
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use cdocs_content::EntryData;
    use pretty_assertions::assert_eq;

    use super::*;

    fn layout() -> PathLayout {
        PathLayout::new("/catalog", "/site")
    }

    #[test]
    fn test_catalog_paths_index_file() {
        let entry = Entry::new("domains", "Orders/index.mdx");

        let paths = layout().catalog_paths(&entry, "domain");

        assert_eq!(
            paths,
            CatalogPaths {
                path: "domains/Orders".to_owned(),
                absolute_file_path: PathBuf::from("/catalog/domains/Orders/index.md"),
                content_file_path: PathBuf::from("/site/src/content/domains/Orders/index.mdx"),
                file_path: PathBuf::from("/site/src/catalog-files/domains/Orders"),
                public_path: "/generated/domains/Orders/index.mdx".to_owned(),
                kind: "domain".to_owned(),
            }
        );
    }

    #[test]
    fn test_catalog_paths_strips_version_from_public_path() {
        let entry = Entry::new("domains", "Orders-1.0.0").with_data(EntryData {
            version: Some("1.0.0".to_owned()),
            ..Default::default()
        });

        let paths = layout().catalog_paths(&entry, "domain");

        assert_eq!(paths.path, "domains/Orders-1.0.0");
        assert_eq!(paths.public_path, "/generated/domains/Orders");
    }

    #[test]
    fn test_catalog_paths_unversioned_keeps_id() {
        let entry = Entry::new("domains", "Orders-");

        let paths = layout().catalog_paths(&entry, "domain");

        assert_eq!(paths.public_path, "/generated/domains/Orders-");
    }

    #[test]
    fn test_catalog_paths_serializes_type() {
        let entry = Entry::new("domains", "Orders/index.mdx");

        let json = serde_json::to_value(layout().catalog_paths(&entry, "domain")).unwrap();

        assert_eq!(json["type"], "domain");
        assert_eq!(json["contentFilePath"], "/site/src/content/domains/Orders/index.mdx");
    }
}
