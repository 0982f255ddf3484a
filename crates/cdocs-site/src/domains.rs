//! Domain assembly.
//!
//! A [`Domain`] is a `domains` collection entry joined with:
//! - the `services` entries its references resolve to,
//! - its latest version and version list (from sibling domain entries),
//! - derived [`CatalogPaths`].
//!
//! Assembled domains are sorted by display name.

use std::cmp::Ordering;
use std::sync::Arc;

use cdocs_content::{
    ContentIndex, Entry, Reference, VersionSet, collections, find_by_id_and_version_or_latest,
    version_set_for,
};
use rayon::prelude::*;
use serde::Serialize;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::catalog_paths::{CatalogPaths, PathLayout};
use crate::error::SiteError;

/// Path fragment marking archived versions of a catalog item.
const VERSIONED_DIR: &str = "versioned";

/// Which domain entries take part in assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VersionMode {
    /// Every non-hidden domain entry, archived versions included.
    #[default]
    AllVersions,
    /// Non-hidden domain entries outside `versioned` directories.
    CurrentOnly,
}

impl VersionMode {
    /// Check whether `entry` takes part in assembly under this mode.
    #[must_use]
    pub fn includes(self, entry: &Entry) -> bool {
        if entry.data.hidden {
            return false;
        }
        match self {
            Self::AllVersions => true,
            Self::CurrentOnly => !entry
                .file_path
                .as_deref()
                .is_some_and(|path| path.contains(VERSIONED_DIR)),
        }
    }
}

/// Domain entry joined with its services, versions and paths.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Domain entry.
    #[serde(flatten)]
    pub entry: Arc<Entry>,
    /// Resolved services, in reference order.
    pub services: Vec<Arc<Entry>>,
    /// Newest version among entries sharing the domain's id.
    pub latest_version: String,
    /// All versions, newest first.
    pub versions: Vec<String>,
    /// Derived file and URL paths.
    pub catalog: CatalogPaths,
    /// Service references that matched no entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_services: Vec<Reference>,
}

impl Domain {
    /// Logical id of the domain.
    #[must_use]
    pub fn id(&self) -> &str {
        self.entry.logical_id()
    }

    /// Display name: `name`, else `id`, else the content id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.entry
            .data
            .name
            .as_deref()
            .unwrap_or_else(|| self.entry.logical_id())
    }
}

/// Compare display names the way a locale collator does for plain text.
///
/// Base letters decide first (accents and case ignored), then accents
/// (unaccented first), then case (lowercase first).
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| b.cmp(a))
}

/// Lowercased text with combining marks removed.
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased, decomposed text; accents sort after their base letter.
fn accented_letters(text: &str) -> String {
    text.nfd().flat_map(char::to_lowercase).collect()
}

/// Assemble all domains of the index for `mode`.
///
/// # Errors
///
/// Returns [`SiteError::Index`] if the `domains` or `services` collection
/// can't be read.
pub fn assemble_domains(
    index: &dyn ContentIndex,
    mode: VersionMode,
    layout: &PathLayout,
) -> Result<Vec<Domain>, SiteError> {
    let domains = index.get_collection_where(collections::DOMAINS, &|entry| mode.includes(entry))?;
    let services = index.get_collection(collections::SERVICES)?;

    let mut assembled: Vec<Domain> = domains
        .par_iter()
        .map(|domain| assemble_domain(domain, &domains, &services, layout))
        .collect();
    assembled.sort_by(|a, b| locale_cmp(a.display_name(), b.display_name()));

    tracing::debug!(count = assembled.len(), ?mode, "Assembled domains");
    Ok(assembled)
}

fn assemble_domain(
    domain: &Arc<Entry>,
    siblings: &[Arc<Entry>],
    services: &[Arc<Entry>],
    layout: &PathLayout,
) -> Domain {
    let VersionSet { latest, versions } = version_set_for(domain, siblings);

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    for reference in &domain.data.services {
        let found =
            find_by_id_and_version_or_latest(services, &reference.id, reference.version.as_deref());
        if found.is_empty() {
            tracing::debug!(
                domain = domain.logical_id(),
                service = %reference.id,
                version = ?reference.version,
                "Unresolved service reference"
            );
            unresolved.push(reference.clone());
        } else {
            resolved.extend(found);
        }
    }

    Domain {
        entry: Arc::clone(domain),
        services: resolved,
        latest_version: latest,
        versions,
        catalog: layout.catalog_paths(domain, "domain"),
        unresolved_services: unresolved,
    }
}
