//! Documentation source abstraction for cdocs.
//!
//! This crate provides a [`Source`] trait for listing and reading files in the
//! documentation directory (`<project_dir>/docs`). This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between navigation logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Source`] trait with `list()`, `read()`, and `exists()` methods
//! - [`FsSource`] implementation for filesystem backends
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cdocs_storage::{FsSource, Source};
//!
//! let source = FsSource::new(PathBuf::from("project/docs"));
//! for file in source.list("guides")? {
//!     let content = source.read(&cdocs_storage::join_path("guides", &file))?;
//!     println!("{file}: {} bytes", content.len());
//! }
//! ```

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod source;

pub use fs::FsSource;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
pub use source::{Source, SourceError, SourceErrorKind, join_path};
