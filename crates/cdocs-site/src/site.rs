//! Catalog site facade.
//!
//! [`CatalogSite`] wires the docs [`Source`], the [`ContentIndex`] and the
//! sidebar configuration together and exposes the operations the rendering
//! layer needs.
//!
//! # Thread Safety
//!
//! `CatalogSite` is `Send + Sync`. The navigation tree is rebuilt on every
//! call; assembled domains are memoized in an internal [`DomainCache`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use cdocs_content::MemoryIndex;
//! use cdocs_site::{CatalogSite, PathLayout, VersionMode};
//! use cdocs_storage::FsSource;
//!
//! let source = Arc::new(FsSource::new(PathBuf::from("catalog/docs")));
//! let index = Arc::new(MemoryIndex::load(Path::new("index.json"))?);
//! let site = CatalogSite::new(source, index, config.sidebar, PathLayout::new("catalog", "."));
//!
//! let adjacent = site.adjacent_pages("guides/intro")?;
//! let domains = site.domains(VersionMode::CurrentOnly)?;
//! ```

use std::sync::Arc;

use cdocs_config::SidebarConfigItem;
use cdocs_content::{ContentIndex, Entry, FrontMatterParser, YamlFrontMatter};
use cdocs_storage::Source;

use crate::catalog_paths::PathLayout;
use crate::domain_cache::DomainCache;
use crate::domains::{Domain, VersionMode, assemble_domains};
use crate::error::SiteError;
use crate::messages::{DomainMessages, messages_for_domain};
use crate::navigation::{AdjacentPages, adjacent_pages, flatten};
use crate::sidebar::{ResolvedSidebar, SidebarResolver};
use crate::ubiquitous::ubiquitous_language;

/// Navigation and domain operations over one catalog.
pub struct CatalogSite {
    source: Arc<dyn Source>,
    index: Arc<dyn ContentIndex>,
    parser: Arc<dyn FrontMatterParser>,
    sidebar: Vec<SidebarConfigItem>,
    layout: PathLayout,
    domains: DomainCache,
}

impl CatalogSite {
    /// Create a site with the YAML front-matter parser.
    ///
    /// # Arguments
    ///
    /// * `source` - Docs directory source (rooted at `<project_dir>/docs`)
    /// * `index` - Content index
    /// * `sidebar` - Configured sidebar tree
    /// * `layout` - Directories catalog paths are derived from
    #[must_use]
    pub fn new(
        source: Arc<dyn Source>,
        index: Arc<dyn ContentIndex>,
        sidebar: Vec<SidebarConfigItem>,
        layout: PathLayout,
    ) -> Self {
        Self {
            source,
            index,
            parser: Arc::new(YamlFrontMatter),
            sidebar,
            layout,
            domains: DomainCache::new(),
        }
    }

    /// Replace the front-matter parser.
    #[must_use]
    pub fn with_parser(mut self, parser: Arc<dyn FrontMatterParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Resolve the configured sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if an auto-generated directory can't be resolved.
    pub fn navigation_tree(&self) -> Result<ResolvedSidebar, SiteError> {
        SidebarResolver::new(&*self.source, &*self.index, &*self.parser).resolve(&self.sidebar)
    }

    /// Get the pages before and after `slug` in sidebar order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the sidebar can't be resolved. An unknown
    /// slug is not an error.
    pub fn adjacent_pages(&self, slug: &str) -> Result<AdjacentPages, SiteError> {
        let tree = self.navigation_tree()?;
        Ok(adjacent_pages(&flatten(&tree.items), slug))
    }

    /// Get the assembled domains for `mode`.
    ///
    /// Repeated calls return the same `Arc` until [`Self::invalidate_domains`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Index`] if the index can't be read.
    pub fn domains(&self, mode: VersionMode) -> Result<Arc<[Domain]>, SiteError> {
        self.domains
            .get_or_try_insert_with(mode, || assemble_domains(&*self.index, mode, &self.layout))
    }

    /// Find a domain by logical id, preferring its latest version.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Index`] if the index can't be read.
    pub fn find_domain(&self, id: &str) -> Result<Option<Domain>, SiteError> {
        let domains = self.domains(VersionMode::AllVersions)?;
        let mut candidates = domains.iter().filter(|d| d.id() == id);
        let latest = candidates
            .clone()
            .find(|d| d.entry.version() == d.latest_version)
            .or_else(|| candidates.next());
        Ok(latest.cloned())
    }

    /// Resolve the messages sent and received by a domain's services.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Index`] if the index can't be read.
    pub fn messages_for_domain(&self, domain: &Domain) -> Result<DomainMessages, SiteError> {
        messages_for_domain(&*self.index, domain)
    }

    /// Get the ubiquitous-language entries next to a domain.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Index`] if the index can't be read.
    pub fn ubiquitous_language(&self, domain: &Domain) -> Result<Vec<Arc<Entry>>, SiteError> {
        ubiquitous_language(&*self.index, domain)
    }

    /// Drop memoized domains so the next call reassembles them.
    pub fn invalidate_domains(&self) {
        self.domains.invalidate();
    }
}
