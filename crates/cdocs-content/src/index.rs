//! Content index abstraction.
//!
//! The content index is the query layer over every collection of the
//! catalog. It is an external collaborator: navigation and domain assembly
//! only need "entry by id" and "collection by name" lookups, expressed by
//! the [`ContentIndex`] trait. [`MemoryIndex`] is an in-memory
//! implementation that can be built in code or loaded from a JSON snapshot.
//!
//! # Snapshot Format
//!
//! ```json
//! {
//!     "customPages": [
//!         {"id": "docs/guides/intro", "data": {"title": "Intro"}}
//!     ],
//!     "domains": [
//!         {"id": "domains/Orders/index.mdx", "filePath": "domains/Orders/index.mdx",
//!          "data": {"id": "Orders", "name": "Orders", "version": "1.0.0"}}
//!     ]
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::entry::Entry;

/// Well-known collection names.
pub mod collections {
    /// Custom documentation pages.
    pub const CUSTOM_PAGES: &str = "customPages";
    /// Domains.
    pub const DOMAINS: &str = "domains";
    /// Services.
    pub const SERVICES: &str = "services";
    /// Events.
    pub const EVENTS: &str = "events";
    /// Commands.
    pub const COMMANDS: &str = "commands";
    /// Queries.
    pub const QUERIES: &str = "queries";
    /// Ubiquitous-language glossaries.
    pub const UBIQUITOUS_LANGUAGES: &str = "ubiquitousLanguages";
}

/// Error returned by content index operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Snapshot file could not be read.
    #[error("Failed to read content index {}: {source}", .path.display())]
    Io {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Snapshot is not valid JSON of the expected shape.
    #[error("Invalid content index: {0}")]
    Parse(#[from] serde_json::Error),
    /// Backend-specific failure.
    #[error("Content index unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the content index.
///
/// Lookups for unknown ids return `Ok(None)`; unknown collections are empty.
/// Errors are reserved for failures of the index itself.
pub trait ContentIndex: Send + Sync {
    /// Get an entry of `collection` by content id.
    fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Arc<Entry>>, IndexError>;

    /// Get all entries of `collection`, in index order.
    fn get_collection(&self, collection: &str) -> Result<Vec<Arc<Entry>>, IndexError>;

    /// Get the entries of `collection` that satisfy `predicate`, in index order.
    fn get_collection_where(
        &self,
        collection: &str,
        predicate: &dyn Fn(&Entry) -> bool,
    ) -> Result<Vec<Arc<Entry>>, IndexError> {
        Ok(self
            .get_collection(collection)?
            .into_iter()
            .filter(|entry| predicate(entry))
            .collect())
    }
}

/// In-memory content index.
///
/// Entries keep their insertion order within a collection. Adding an entry
/// whose id already exists in the collection replaces it in place.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    collections: HashMap<String, Vec<Arc<Entry>>>,
    positions: HashMap<(String, String), usize>,
}

impl MemoryIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to a collection (builder form).
    ///
    /// The entry's `collection` field is overwritten with `collection`.
    #[must_use]
    pub fn with_entry(mut self, collection: &str, entry: Entry) -> Self {
        self.insert(collection, entry);
        self
    }

    /// Add an entry to a collection.
    ///
    /// The entry's `collection` field is overwritten with `collection`.
    pub fn insert(&mut self, collection: &str, mut entry: Entry) {
        collection.clone_into(&mut entry.collection);
        let key = (collection.to_owned(), entry.id.clone());
        let entries = self.collections.entry(collection.to_owned()).or_default();

        if let Some(&pos) = self.positions.get(&key) {
            entries[pos] = Arc::new(entry);
        } else {
            self.positions.insert(key, entries.len());
            entries.push(Arc::new(entry));
        }
    }

    /// Number of entries across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Build an index from a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Parse`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let mut snapshot: HashMap<String, Vec<Entry>> = serde_json::from_str(json)?;

        // Sort collection names so replacement order doesn't depend on map iteration
        let mut names: Vec<_> = snapshot.keys().cloned().collect();
        names.sort();

        let mut index = Self::new();
        for name in names {
            for entry in snapshot.remove(&name).unwrap_or_default() {
                index.insert(&name, entry);
            }
        }

        tracing::debug!(entries = index.len(), "Loaded content index snapshot");
        Ok(index)
    }

    /// Load an index from a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Io`] if the file can't be read and
    /// [`IndexError::Parse`] if its content is malformed.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

impl ContentIndex for MemoryIndex {
    fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Arc<Entry>>, IndexError> {
        let entry = self
            .positions
            .get(&(collection.to_owned(), id.to_owned()))
            .and_then(|&pos| self.collections.get(collection)?.get(pos))
            .map(Arc::clone);
        Ok(entry)
    }

    fn get_collection(&self, collection: &str) -> Result<Vec<Arc<Entry>>, IndexError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
