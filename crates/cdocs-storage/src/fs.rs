//! Filesystem source implementation.
//!
//! Provides [`FsSource`] for reading documentation files from the local
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::source::{Source, SourceError, SourceErrorKind, is_contained};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Default file patterns for documentation pages.
const DEFAULT_PATTERNS: [&str; 2] = ["*.md", "*.mdx"];

/// Filesystem source implementation.
///
/// Lists and reads files below a docs root directory. Directory listings
/// skip hidden files and subdirectories, keep only file names matching the
/// configured patterns, and are sorted alphabetically so results don't
/// depend on the platform's `readdir` order.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use cdocs_storage::{FsSource, Source};
///
/// let source = FsSource::new(PathBuf::from("project/docs"));
/// let files = source.list("guides")?;
/// ```
#[derive(Debug)]
pub struct FsSource {
    /// Root directory for documentation files.
    root: PathBuf,
    /// File name patterns kept by `list` (e.g., "*.mdx").
    patterns: Vec<Pattern>,
}

impl FsSource {
    /// Create a new filesystem source with the default `*.md`/`*.mdx` patterns.
    ///
    /// # Arguments
    ///
    /// * `root` - Docs root directory
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self { root, patterns }
    }

    /// Create a new filesystem source with custom file name patterns.
    ///
    /// An empty pattern list keeps every file.
    ///
    /// # Arguments
    ///
    /// * `root` - Docs root directory
    /// * `patterns` - Glob patterns matched against file names (e.g., `["*.mdx"]`)
    ///
    /// # Errors
    ///
    /// Returns [`glob::PatternError`] if any pattern is invalid.
    pub fn with_patterns(
        root: PathBuf,
        patterns: &[String],
    ) -> Result<Self, glob::PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { root, patterns })
    }

    /// Docs root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative source path against the root.
    ///
    /// Rejects paths containing parent directory components (`..`).
    fn resolve(&self, path: &str) -> Result<PathBuf, SourceError> {
        if !is_contained(path) {
            return Err(SourceError::new(SourceErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        let relative = path.trim_matches('/');
        if relative.is_empty() {
            Ok(self.root.clone())
        } else {
            Ok(self.root.join(relative))
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Source for FsSource {
    fn list(&self, dir: &str) -> Result<Vec<String>, SourceError> {
        let dir_path = self.resolve(dir)?;
        let entries = fs::read_dir(&dir_path)
            .map_err(|e| SourceError::io(e, Some(dir_path.clone())).with_backend(BACKEND))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| SourceError::io(e, Some(dir_path.clone())).with_backend(BACKEND))?;
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // Skip hidden files
            if name.starts_with('.') || !self.matches(&name) {
                continue;
            }
            names.push(name);
        }

        names.sort();
        tracing::debug!(dir, count = names.len(), "Listed source directory");
        Ok(names)
    }

    fn read(&self, path: &str) -> Result<String, SourceError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(&full_path)
            .map_err(|e| SourceError::io(e, Some(full_path.clone())).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.exists())
    }
}
