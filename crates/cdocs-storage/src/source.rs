//! Source trait and error types.
//!
//! Provides the core [`Source`] trait for listing and reading documentation
//! files, along with [`SourceError`] for unified error handling across backends.
//!
//! # Path Convention
//!
//! All path parameters are `/`-separated paths relative to the docs root:
//! - `""` - the docs root itself
//! - `"guides"` - a directory
//! - `"guides/intro.mdx"` - a file
//!
//! Paths containing `..` are rejected with [`SourceErrorKind::InvalidPath`].

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (e.g. parent directory traversal).
    InvalidPath,
    /// Content is not valid UTF-8.
    InvalidData,
    /// Other/unknown error category.
    Other,
}

/// Source error with semantic kind and backend-specific cause.
#[derive(Debug)]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the underlying cause to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_path(path)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData => SourceErrorKind::InvalidData,
            _ => SourceErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidPath => "Invalid path",
            SourceErrorKind::InvalidData => "Invalid data",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read access to the documentation directory.
///
/// Implementations map `/`-separated relative paths onto their backend.
/// Listing order is part of the contract: callers keep whatever order the
/// backend returns, so backends should list deterministically.
pub trait Source: Send + Sync {
    /// List the files directly inside a directory.
    ///
    /// Returns bare file names (no directory prefix). Subdirectories are
    /// not included.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the directory doesn't exist or can't be read.
    fn list(&self, dir: &str) -> Result<Vec<String>, SourceError>;

    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file doesn't exist, can't be read, or
    /// isn't valid UTF-8.
    fn read(&self, path: &str) -> Result<String, SourceError>;

    /// Check if a file or directory exists at the given path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &str) -> bool;
}

/// Join a directory and a file name into a source path.
///
/// Empty segments and surrounding slashes are dropped, so `join_path("", "a.md")`
/// is `"a.md"` and `join_path("guides/", "a.md")` is `"guides/a.md"`.
#[must_use]
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_matches('/');
    let name = name.trim_start_matches('/');
    if dir.is_empty() {
        name.to_owned()
    } else {
        format!("{dir}/{name}")
    }
}

/// Check that a source path stays inside the docs root.
pub(crate) fn is_contained(path: &str) -> bool {
    !path.split('/').any(|segment| segment == "..")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_source_error_new() {
        let err = SourceError::new(SourceErrorKind::NotFound);

        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert!(err.path.as_deref().is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_source_error_with_path() {
        let err = SourceError::new(SourceErrorKind::NotFound).with_path("/foo/bar");

        assert_eq!(err.path.as_deref(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_source_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SourceError::new(SourceErrorKind::NotFound).with_source(io_err);

        assert!(err.downcast_source::<std::io::Error>().is_some());
    }

    #[test]
    fn test_source_error_io_kinds() {
        let cases = [
            (std::io::ErrorKind::NotFound, SourceErrorKind::NotFound),
            (
                std::io::ErrorKind::PermissionDenied,
                SourceErrorKind::PermissionDenied,
            ),
            (std::io::ErrorKind::InvalidData, SourceErrorKind::InvalidData),
            (std::io::ErrorKind::TimedOut, SourceErrorKind::Other),
        ];

        for (io_kind, expected) in cases {
            let err = SourceError::io(std::io::Error::new(io_kind, "boom"), None);
            assert_eq!(err.kind, expected);
        }
    }

    #[test]
    fn test_source_error_display_simple() {
        let err = SourceError::new(SourceErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_source_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SourceError::new(SourceErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/foo/bar")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: /foo/bar)"
        );
    }

    #[test]
    fn test_source_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceError>();
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a.md"), "a.md");
        assert_eq!(join_path("guides", "a.md"), "guides/a.md");
        assert_eq!(join_path("/guides/", "a.md"), "guides/a.md");
        assert_eq!(join_path("guides/setup", "/a.md"), "guides/setup/a.md");
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained("guides/a.md"));
        assert!(is_contained(""));
        assert!(!is_contained("../secret"));
        assert!(!is_contained("guides/../../secret"));
    }
}
