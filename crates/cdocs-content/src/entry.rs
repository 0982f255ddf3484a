//! Content index entry types.
//!
//! An [`Entry`] is one record of a content collection (a custom page, a
//! domain, a service, a message, ...). Typed fields cover what navigation and
//! domain assembly read; anything else is kept in [`EntryData::extra`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reference to another catalog entry by logical id and optional version.
///
/// A missing version, or the literal `"latest"`, selects the latest version.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Logical id of the referenced entry.
    pub id: String,
    /// Exact version or semver range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Reference {
    /// Create a reference to the latest version of `id`.
    #[must_use]
    pub fn latest(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    /// Create a reference to a specific version or range of `id`.
    #[must_use]
    pub fn versioned(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: Some(version.into()),
        }
    }
}

/// Front-matter data of an entry.
///
/// All fields are optional. Unknown fields are preserved in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    /// Logical id shared by all versions of the same catalog item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Custom URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Version string (usually semver).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Hidden entries are left out of listings.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// Services owned by a domain.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Reference>,

    /// Messages a service sends.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sends: Vec<Reference>,

    /// Messages a service receives.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receives: Vec<Reference>,

    /// Any other front-matter field.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One record of a content collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Content id, unique within the collection (e.g. `"docs/guides/intro"`).
    pub id: String,

    /// Name of the collection this entry belongs to.
    #[serde(default)]
    pub collection: String,

    /// Source file path, relative to the project directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Front-matter data.
    #[serde(default)]
    pub data: EntryData,
}

impl Entry {
    /// Create an entry with empty data.
    #[must_use]
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            collection: collection.into(),
            file_path: None,
            data: EntryData::default(),
        }
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Set the front-matter data.
    #[must_use]
    pub fn with_data(mut self, data: EntryData) -> Self {
        self.data = data;
        self
    }

    /// Logical id (`data.id`), falling back to the content id.
    #[must_use]
    pub fn logical_id(&self) -> &str {
        self.data.id.as_deref().unwrap_or(&self.id)
    }

    /// Version string, empty when unversioned.
    #[must_use]
    pub fn version(&self) -> &str {
        self.data.version.as_deref().unwrap_or_default()
    }
}
