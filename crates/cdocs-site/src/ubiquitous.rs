//! Ubiquitous-language entries co-located with a domain.

use std::sync::Arc;

use cdocs_content::{ContentIndex, Entry, collections};

use crate::domains::Domain;
use crate::error::SiteError;

/// Parent directory of an entry's file path, `.` when there is none.
fn parent_dir(file_path: Option<&str>) -> &str {
    match file_path.and_then(|path| path.rsplit_once('/')) {
        Some((parent, _)) if !parent.is_empty() => parent,
        Some(_) => "/",
        None => ".",
    }
}

/// Get the ubiquitous-language entries stored next to the domain's file.
///
/// Directories are compared as plain strings.
///
/// # Errors
///
/// Returns [`SiteError::Index`] if the collection can't be read.
pub fn ubiquitous_language(
    index: &dyn ContentIndex,
    domain: &Domain,
) -> Result<Vec<Arc<Entry>>, SiteError> {
    let domain_dir = parent_dir(domain.entry.file_path.as_deref());
    let entries = index.get_collection_where(collections::UBIQUITOUS_LANGUAGES, &|entry| {
        parent_dir(entry.file_path.as_deref()) == domain_dir
    })?;
    Ok(entries)
}
