//! Memoized domain assembly.
//!
//! [`DomainCache`] holds one assembled domain list per [`VersionMode`].
//! Lists are shared as `Arc<[Domain]>`, so repeated lookups hand out the
//! same allocation until [`DomainCache::invalidate`] is called.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domains::{Domain, VersionMode};
use crate::error::SiteError;

/// Cache of assembled domains, keyed by version mode.
///
/// Concurrent first lookups for one mode may both build the list; the first
/// stored list wins and is returned to both callers.
#[derive(Debug, Default)]
pub struct DomainCache {
    entries: RwLock<HashMap<VersionMode, Arc<[Domain]>>>,
}

impl DomainCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached list for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, mode: VersionMode) -> Option<Arc<[Domain]>> {
        self.entries.read().unwrap().get(&mode).map(Arc::clone)
    }

    /// Get the cached list for `mode`, building it with `build` on a miss.
    ///
    /// # Errors
    ///
    /// Returns the error of `build`; nothing is cached in that case.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn get_or_try_insert_with<F>(
        &self,
        mode: VersionMode,
        build: F,
    ) -> Result<Arc<[Domain]>, SiteError>
    where
        F: FnOnce() -> Result<Vec<Domain>, SiteError>,
    {
        if let Some(cached) = self.get(mode) {
            tracing::debug!(?mode, "Domain cache hit");
            return Ok(cached);
        }

        tracing::debug!(?mode, "Domain cache miss");
        let built: Arc<[Domain]> = build()?.into();

        let mut entries = self.entries.write().unwrap();
        Ok(Arc::clone(entries.entry(mode).or_insert(built)))
    }

    /// Drop all cached lists.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn invalidate(&self) {
        self.entries.write().unwrap().clear();
        tracing::debug!("Domain cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use cdocs_content::Entry;

    use super::*;
    use crate::catalog_paths::PathLayout;

    static_assertions::assert_impl_all!(DomainCache: Send, Sync);

    fn domain(id: &str) -> Domain {
        let entry = Arc::new(Entry::new("domains", id));
        Domain {
            catalog: PathLayout::default().catalog_paths(&entry, "domain"),
            entry,
            services: Vec::new(),
            latest_version: String::new(),
            versions: Vec::new(),
            unresolved_services: Vec::new(),
        }
    }

    #[test]
    fn test_second_lookup_returns_same_allocation() {
        let cache = DomainCache::new();
        let builds = AtomicUsize::new(0);
        let build = || {
            builds.fetch_add(1, Ordering::SeqCst);
            Ok(vec![domain("Orders")])
        };

        let first = cache.get_or_try_insert_with(VersionMode::AllVersions, build).unwrap();
        let second = cache.get_or_try_insert_with(VersionMode::AllVersions, build).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_modes_cached_separately() {
        let cache = DomainCache::new();

        let all = cache
            .get_or_try_insert_with(VersionMode::AllVersions, || Ok(vec![domain("a"), domain("b")]))
            .unwrap();
        let current = cache
            .get_or_try_insert_with(VersionMode::CurrentOnly, || Ok(vec![domain("a")]))
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_empty_result_is_cached() {
        let cache = DomainCache::new();

        cache
            .get_or_try_insert_with(VersionMode::AllVersions, || Ok(Vec::new()))
            .unwrap();

        assert!(cache.get(VersionMode::AllVersions).is_some());
    }

    #[test]
    fn test_error_is_not_cached() {
        let cache = DomainCache::new();

        let result = cache.get_or_try_insert_with(VersionMode::AllVersions, || {
            Err(SiteError::Index(cdocs_content::IndexError::Unavailable(
                "offline".to_owned(),
            )))
        });

        assert!(result.is_err());
        assert!(cache.get(VersionMode::AllVersions).is_none());
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let cache = DomainCache::new();
        let first = cache
            .get_or_try_insert_with(VersionMode::AllVersions, || Ok(vec![domain("a")]))
            .unwrap();

        cache.invalidate();
        assert!(cache.get(VersionMode::AllVersions).is_none());

        let second = cache
            .get_or_try_insert_with(VersionMode::AllVersions, || Ok(vec![domain("a")]))
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
