//! Sidebar resolution.
//!
//! Turns the configured sidebar tree into an explicit [`SidebarItem`] tree.
//! Auto-generated items are expanded into one page per file of their docs
//! directory:
//!
//! 1. List the directory through the [`Source`].
//! 2. Read each file and parse its front matter.
//! 3. Derive the content id: front-matter `slug`, else
//!    `docs/<directory>/<file stem>`.
//! 4. Look the id up in the `customPages` collection.
//!
//! Files without an index entry are left out of the tree and reported in
//! [`ResolvedSidebar::dropped`].

use std::path::Path;
use std::sync::Arc;

use cdocs_config::{Badge, SidebarConfigItem};
use cdocs_content::{ContentIndex, Entry, FrontMatterParser, collections};
use cdocs_storage::{Source, join_path};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::SiteError;

/// Fixed documentation root segment of custom page ids.
pub(crate) const DOCS_ROOT: &str = "docs";

/// Resolved sidebar item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display label.
    pub label: String,
    /// Page slug, `None` for pure containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Child items, empty for leaves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
    /// Optional badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Whether the item starts collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarItem {
    /// Create a leaf page item.
    #[must_use]
    pub fn page(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: Some(slug.into()),
            items: Vec::new(),
            badge: None,
            collapsed: None,
        }
    }
}

/// Result of sidebar resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedSidebar {
    /// Resolved tree, in configuration order.
    pub items: Vec<SidebarItem>,
    /// Content ids of auto-generated files with no `customPages` entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
}

/// Expands sidebar configuration into a [`SidebarItem`] tree.
pub struct SidebarResolver<'a> {
    source: &'a dyn Source,
    index: &'a dyn ContentIndex,
    parser: &'a dyn FrontMatterParser,
}

impl<'a> SidebarResolver<'a> {
    /// Create a resolver over the docs source, content index and parser.
    #[must_use]
    pub fn new(
        source: &'a dyn Source,
        index: &'a dyn ContentIndex,
        parser: &'a dyn FrontMatterParser,
    ) -> Self {
        Self {
            source,
            index,
            parser,
        }
    }

    /// Resolve a configured sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if a directory or file can't be read, front
    /// matter is malformed, or the index fails. Missing index entries are not
    /// errors.
    pub fn resolve(&self, config: &[SidebarConfigItem]) -> Result<ResolvedSidebar, SiteError> {
        let mut dropped = Vec::new();
        let items = self.resolve_items(config, &mut dropped)?;

        if !dropped.is_empty() {
            tracing::debug!(count = dropped.len(), "Dropped docs files without index entries");
        }

        Ok(ResolvedSidebar { items, dropped })
    }

    fn resolve_items(
        &self,
        items: &[SidebarConfigItem],
        dropped: &mut Vec<String>,
    ) -> Result<Vec<SidebarItem>, SiteError> {
        items
            .iter()
            .map(|item| self.resolve_item(item, dropped))
            .collect()
    }

    fn resolve_item(
        &self,
        item: &SidebarConfigItem,
        dropped: &mut Vec<String>,
    ) -> Result<SidebarItem, SiteError> {
        let resolved = match item {
            SidebarConfigItem::Autogenerated {
                label,
                autogenerated,
                badge,
                collapsed,
            } => SidebarItem {
                label: label.clone(),
                slug: None,
                items: self.autogenerated_pages(&autogenerated.directory, dropped)?,
                badge: badge.clone(),
                collapsed: *collapsed,
            },
            SidebarConfigItem::Group {
                label,
                slug,
                items,
                badge,
                collapsed,
            } => SidebarItem {
                label: label.clone(),
                slug: slug.clone(),
                items: self.resolve_items(items, dropped)?,
                badge: badge.clone(),
                collapsed: *collapsed,
            },
            SidebarConfigItem::Link {
                label,
                slug,
                badge,
                collapsed,
            } => SidebarItem {
                label: label.clone(),
                slug: slug.clone(),
                items: Vec::new(),
                badge: badge.clone(),
                collapsed: *collapsed,
            },
        };
        Ok(resolved)
    }

    /// Build one page item per indexed file of `directory`, in listing order.
    #[tracing::instrument(skip(self, dropped))]
    fn autogenerated_pages(
        &self,
        directory: &str,
        dropped: &mut Vec<String>,
    ) -> Result<Vec<SidebarItem>, SiteError> {
        let directory = normalize_dir(directory);
        let files = self.source.list(&directory)?;

        // Indexed parallel iterator: results come back in listing order
        let lookups: Vec<Result<(String, Option<Arc<Entry>>), SiteError>> = files
            .par_iter()
            .map(|file| self.lookup_file(&directory, file))
            .collect();

        let mut pages = Vec::with_capacity(lookups.len());
        for lookup in lookups {
            match lookup? {
                (_, Some(entry)) => pages.push(page_item(&entry)),
                (id, None) => {
                    tracing::debug!(%id, "No customPages entry for docs file");
                    dropped.push(id);
                }
            }
        }
        Ok(pages)
    }

    /// Read one file and fetch its index entry.
    fn lookup_file(
        &self,
        directory: &str,
        file: &str,
    ) -> Result<(String, Option<Arc<Entry>>), SiteError> {
        let path = join_path(directory, file);
        let content = self.source.read(&path)?;
        let front_matter = self
            .parser
            .parse(&content)
            .map_err(|source| SiteError::FrontMatter {
                path: path.clone(),
                source,
            })?;

        let id = front_matter
            .slug
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| content_id(directory, file));
        let entry = self.index.get_entry(collections::CUSTOM_PAGES, &id)?;
        Ok((id, entry))
    }
}

/// Directory path without `.` and empty segments, so `./guides/` and
/// `guides` produce the same content ids.
fn normalize_dir(directory: &str) -> String {
    directory
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Default content id of a docs file: `docs/<directory>/<file stem>`.
fn content_id(directory: &str, file: &str) -> String {
    let stem = Path::new(file)
        .file_stem()
        .map_or_else(|| file.into(), |s| s.to_string_lossy());
    join_path(DOCS_ROOT, &join_path(directory, &stem))
}

/// Page item for an indexed custom page.
fn page_item(entry: &Entry) -> SidebarItem {
    let label = entry.data.title.clone().unwrap_or_else(|| entry.id.clone());
    let slug = entry
        .data
        .slug
        .clone()
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| {
            entry
                .id
                .strip_prefix(DOCS_ROOT)
                .unwrap_or(&entry.id)
                .to_owned()
        });
    SidebarItem::page(label, slug)
}
