//! Navigation and domain assembly for cdocs.
//!
//! This crate provides:
//! - [`CatalogSite`]: facade over the docs source, content index and sidebar
//! - Sidebar resolution with auto-generated directories ([`SidebarResolver`])
//! - Previous/next page lookup ([`flatten`], [`adjacent_pages`])
//! - Domain assembly with memoization ([`assemble_domains`], [`DomainCache`])
//! - Message and ubiquitous-language lookups for assembled domains
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use cdocs_config::SidebarConfigItem;
//! use cdocs_content::MemoryIndex;
//! use cdocs_site::{CatalogSite, PathLayout, VersionMode};
//! use cdocs_storage::FsSource;
//!
//! let source = Arc::new(FsSource::new(PathBuf::from("catalog/docs")));
//! let index = Arc::new(MemoryIndex::new());
//! let sidebar = vec![SidebarConfigItem::autogenerated("Guides", "guides")];
//! let site = CatalogSite::new(source, index, sidebar, PathLayout::new("catalog", "."));
//!
//! let tree = site.navigation_tree()?;
//! let domains = site.domains(VersionMode::AllVersions)?;
//! ```

mod catalog_paths;
mod domain_cache;
mod domains;
mod error;
mod messages;
mod navigation;
mod sidebar;
mod site;
mod ubiquitous;

pub use catalog_paths::{CatalogPaths, PathLayout};
pub use domain_cache::DomainCache;
pub use domains::{Domain, VersionMode, assemble_domains, locale_cmp};
pub use error::SiteError;
pub use messages::{DomainMessages, messages_for_domain};
pub use navigation::{AdjacentPage, AdjacentPages, adjacent_pages, flatten, normalize_slug};
pub use sidebar::{ResolvedSidebar, SidebarItem, SidebarResolver};
pub use site::CatalogSite;
pub use ubiquitous::ubiquitous_language;
