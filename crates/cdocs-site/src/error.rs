//! Error type for site operations.

use cdocs_content::{FrontMatterError, IndexError};
use cdocs_storage::SourceError;

/// Error returned by navigation and domain operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Docs directory or file could not be listed or read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Content index lookup failed.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// Front matter of a docs file is malformed.
    #[error("Invalid front matter in {path}: {source}")]
    FrontMatter {
        /// File path relative to the docs root.
        path: String,
        /// Parser error.
        #[source]
        source: FrontMatterError,
    },
}
