//! Mock source implementation for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use std::sync::RwLock;

use crate::source::{Source, SourceError, SourceErrorKind, is_contained};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock source for testing.
///
/// Stores files in memory. Directory listings return files in the order they
/// were added, which lets tests pin the listing order explicitly.
///
/// # Example
///
/// ```ignore
/// use cdocs_storage::{MockSource, Source};
///
/// let source = MockSource::new()
///     .with_file("guides/b.mdx", "---\ntitle: B\n---\n")
///     .with_file("guides/a.mdx", "---\ntitle: A\n---\n");
///
/// assert_eq!(source.list("guides").unwrap(), vec!["b.mdx", "a.mdx"]);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    files: RwLock<Vec<(String, String)>>,
}

/// Split a path into directory and file name.
fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add a file after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add_file(&self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into().trim_matches('/').to_owned();
        let mut files = self.files.write().unwrap();
        if let Some(existing) = files.iter_mut().find(|(p, _)| *p == path) {
            existing.1 = content.into();
        } else {
            files.push((path, content.into()));
        }
    }

    fn check_path(path: &str) -> Result<&str, SourceError> {
        if is_contained(path) {
            Ok(path.trim_matches('/'))
        } else {
            Err(SourceError::new(SourceErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND))
        }
    }

    fn is_dir(files: &[(String, String)], dir: &str) -> bool {
        dir.is_empty()
            || files
                .iter()
                .any(|(p, _)| p.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/')))
    }
}

impl Source for MockSource {
    fn list(&self, dir: &str) -> Result<Vec<String>, SourceError> {
        let dir = Self::check_path(dir)?;
        let files = self.files.read().unwrap();
        if !Self::is_dir(&files, dir) {
            return Err(SourceError::not_found(dir).with_backend(BACKEND));
        }

        Ok(files
            .iter()
            .filter_map(|(path, _)| {
                let (parent, name) = split_path(path);
                (parent == dir).then(|| name.to_owned())
            })
            .collect())
    }

    fn read(&self, path: &str) -> Result<String, SourceError> {
        let path = Self::check_path(path)?;
        self.files
            .read()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| SourceError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        let Ok(path) = Self::check_path(path) else {
            return false;
        };
        let files = self.files.read().unwrap();
        files.iter().any(|(p, _)| p == path) || Self::is_dir(&files, path)
    }
}
