//! Version helpers for versioned catalog entries.
//!
//! Catalog items may exist in several versions, each stored as its own
//! entry sharing one logical id. Versions are usually semver but authors are
//! free to write `1`, `v2.1` or anything else, so comparisons go through
//! [`coerce`] first and fall back to plain string ordering.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use semver::{Version, VersionReq};

use crate::entry::Entry;

/// First `major[.minor[.patch]]` run inside a version string.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap());

/// Coerce a loose version string into a semver [`Version`].
///
/// Missing minor and patch components default to zero, so `"v2"` becomes
/// `2.0.0`. Returns `None` if the string contains no number.
#[must_use]
pub fn coerce(version: &str) -> Option<Version> {
    let caps = VERSION_RE.captures(version)?;
    let part = |i: usize| -> Option<u64> {
        caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// Sort versions newest first.
///
/// Uses semver ordering when every version coerces, string ordering
/// otherwise. Duplicates are removed.
#[must_use]
pub fn sort_versions<'a>(versions: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut versions: Vec<String> = versions.into_iter().map(str::to_owned).collect();
    versions.sort();
    versions.dedup();

    let coerced: Option<Vec<Version>> = versions.iter().map(|v| coerce(v)).collect();
    match coerced {
        Some(coerced) => {
            let mut pairs: Vec<_> = coerced.into_iter().zip(versions).collect();
            // Stable on equal semver (e.g. "1" and "1.0.0") keeps string order
            pairs.sort_by(|(a, _), (b, _)| b.cmp(a));
            pairs.into_iter().map(|(_, v)| v).collect()
        }
        None => {
            versions.sort_by(|a, b| b.cmp(a));
            versions
        }
    }
}

/// Latest version and full version list of a catalog item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionSet {
    /// Newest version, empty when the item is unversioned.
    pub latest: String,
    /// All known versions, newest first.
    pub versions: Vec<String>,
}

/// Compute the versions of `item` from sibling entries sharing its logical id.
#[must_use]
pub fn version_set_for(item: &Entry, collection: &[Arc<Entry>]) -> VersionSet {
    let id = item.logical_id();
    let versions = sort_versions(
        collection
            .iter()
            .filter(|entry| entry.logical_id() == id)
            .map(|entry| entry.version())
            .filter(|v| !v.is_empty()),
    );

    VersionSet {
        latest: versions.first().cloned().unwrap_or_default(),
        versions,
    }
}

/// Check whether `version` satisfies the requested version or range.
///
/// Exact string matches always satisfy. A request that parses as a full
/// semver version must equal the coerced version; anything else is tried as a
/// semver range.
fn satisfies(version: &str, requested: &str) -> bool {
    if version == requested {
        return true;
    }
    let Some(actual) = coerce(version) else {
        return false;
    };
    if let Ok(exact) = Version::parse(requested) {
        return actual == exact;
    }
    VersionReq::parse(requested).is_ok_and(|req| req.matches(&actual))
}

/// Find entries of `collection` by logical id and version.
///
/// A missing version, or `"latest"`, returns every entry carrying the newest
/// version of `id`. Otherwise returns the entries whose version satisfies the
/// requested version or semver range. Collection order is preserved.
#[must_use]
pub fn find_by_id_and_version_or_latest(
    collection: &[Arc<Entry>],
    id: &str,
    version: Option<&str>,
) -> Vec<Arc<Entry>> {
    let matching = collection.iter().filter(|entry| entry.logical_id() == id);

    match version {
        None | Some("latest") => {
            let latest = sort_versions(matching.clone().map(|entry| entry.version()))
                .into_iter()
                .next();
            let Some(latest) = latest else {
                return Vec::new();
            };
            matching
                .filter(|entry| entry.version() == latest)
                .map(Arc::clone)
                .collect()
        }
        Some(requested) => matching
            .filter(|entry| satisfies(entry.version(), requested))
            .map(Arc::clone)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entry::EntryData;

    fn versioned(content_id: &str, id: &str, version: &str) -> Arc<Entry> {
        Arc::new(Entry::new("services", content_id).with_data(EntryData {
            id: Some(id.to_owned()),
            version: (!version.is_empty()).then(|| version.to_owned()),
            ..Default::default()
        }))
    }

    fn content_ids(entries: &[Arc<Entry>]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce("1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce("v2"), Some(Version::new(2, 0, 0)));
        assert_eq!(coerce("0.3"), Some(Version::new(0, 3, 0)));
        assert_eq!(coerce("release-4.1.7-beta"), Some(Version::new(4, 1, 7)));
        assert_eq!(coerce("latest"), None);
        assert_eq!(coerce(""), None);
    }

    #[test]
    fn test_sort_versions_semver() {
        let sorted = sort_versions(["0.0.1", "1.0.0", "0.10.0", "0.2.0"]);

        assert_eq!(sorted, vec!["1.0.0", "0.10.0", "0.2.0", "0.0.1"]);
    }

    #[test]
    fn test_sort_versions_falls_back_to_strings() {
        let sorted = sort_versions(["alpha", "1.0.0", "beta"]);

        assert_eq!(sorted, vec!["beta", "alpha", "1.0.0"]);
    }

    #[test]
    fn test_sort_versions_dedups() {
        let sorted = sort_versions(["1.0.0", "2.0.0", "1.0.0"]);

        assert_eq!(sorted, vec!["2.0.0", "1.0.0"]);
    }

    #[test]
    fn test_version_set_for() {
        let collection = vec![
            versioned("a-1", "Orders", "0.0.1"),
            versioned("a-2", "Orders", "1.0.0"),
            versioned("b", "Payments", "5.0.0"),
            versioned("a-3", "Orders", "0.1.0"),
        ];

        let set = version_set_for(&collection[0], &collection);

        assert_eq!(set.latest, "1.0.0");
        assert_eq!(set.versions, vec!["1.0.0", "0.1.0", "0.0.1"]);
    }

    #[test]
    fn test_version_set_for_unversioned() {
        let collection = vec![versioned("a", "Orders", "")];

        let set = version_set_for(&collection[0], &collection);

        assert_eq!(set, VersionSet::default());
    }

    #[test]
    fn test_find_latest() {
        let collection = vec![
            versioned("inv-1", "Inventory", "1.0.0"),
            versioned("inv-2", "Inventory", "2.0.0"),
            versioned("pay", "Payments", "3.0.0"),
        ];

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", None);
        assert_eq!(content_ids(&found), vec!["inv-2"]);

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", Some("latest"));
        assert_eq!(content_ids(&found), vec!["inv-2"]);
    }

    #[test]
    fn test_find_exact_version() {
        let collection = vec![
            versioned("inv-1", "Inventory", "1.0.0"),
            versioned("inv-2", "Inventory", "2.0.0"),
        ];

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", Some("1.0.0"));

        assert_eq!(content_ids(&found), vec!["inv-1"]);
    }

    #[test]
    fn test_find_semver_range() {
        let collection = vec![
            versioned("inv-1", "Inventory", "1.0.0"),
            versioned("inv-2", "Inventory", "1.4.2"),
            versioned("inv-3", "Inventory", "2.0.0"),
        ];

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", Some("^1.0.0"));

        assert_eq!(content_ids(&found), vec!["inv-1", "inv-2"]);
    }

    #[test]
    fn test_find_non_semver_exact_string() {
        let collection = vec![
            versioned("inv-a", "Inventory", "alpha"),
            versioned("inv-b", "Inventory", "beta"),
        ];

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", Some("beta"));

        assert_eq!(content_ids(&found), vec!["inv-b"]);
    }

    #[test]
    fn test_find_unknown_id_or_version() {
        let collection = vec![versioned("inv-1", "Inventory", "1.0.0")];

        assert!(find_by_id_and_version_or_latest(&collection, "Missing", None).is_empty());
        assert!(
            find_by_id_and_version_or_latest(&collection, "Inventory", Some("9.0.0")).is_empty()
        );
        assert!(
            find_by_id_and_version_or_latest(&collection, "Inventory", Some("not a range"))
                .is_empty()
        );
    }

    #[test]
    fn test_find_latest_unversioned_entries() {
        let collection = vec![versioned("inv", "Inventory", "")];

        let found = find_by_id_and_version_or_latest(&collection, "Inventory", None);

        assert_eq!(content_ids(&found), vec!["inv"]);
    }
}
