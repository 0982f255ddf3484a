//! Content index, front matter and version resolution for cdocs.
//!
//! This crate holds the data side of the catalog:
//!
//! - [`Entry`] and [`Reference`]: records of content collections
//! - [`ContentIndex`]: lookup trait over collections, with [`MemoryIndex`]
//! - [`FrontMatterParser`]: page front-matter parsing, with [`YamlFrontMatter`]
//! - [`versions`]: version coercion, sorting and `id`/`version` resolution
//!
//! # Example
//!
//! ```ignore
//! use cdocs_content::{ContentIndex, MemoryIndex, collections};
//!
//! let index = MemoryIndex::load(Path::new("catalog-index.json"))?;
//! for domain in index.get_collection(collections::DOMAINS)? {
//!     println!("{} {}", domain.logical_id(), domain.version());
//! }
//! ```

mod entry;
mod frontmatter;
mod index;
pub mod versions;

pub use entry::{Entry, EntryData, Reference};
pub use frontmatter::{FrontMatter, FrontMatterError, FrontMatterParser, YamlFrontMatter};
pub use index::{ContentIndex, IndexError, MemoryIndex, collections};
pub use versions::{VersionSet, find_by_id_and_version_or_latest, version_set_for};
