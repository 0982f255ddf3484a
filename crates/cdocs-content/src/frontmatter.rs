//! YAML front-matter parsing.
//!
//! Front matter is a YAML block at the very top of a page, delimited by
//! `---` lines:
//!
//! ```text
//! ---
//! title: Getting started
//! slug: guides/getting-started
//! ---
//! # Page body
//! ```
//!
//! Text without a leading `---` line has empty front matter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Front-matter fields of a page.
///
/// `slug` and `title` are typed because navigation reads them; everything
/// else is kept as JSON values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Custom content id / URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Remaining fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl FrontMatter {
    /// Check if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slug.is_none() && self.title.is_none() && self.fields.is_empty()
    }
}

/// Error type for front-matter parsing.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Opening `---` without a closing one.
    #[error("Unterminated front matter")]
    Unterminated,
    /// Parsing error (format-specific).
    #[error("{0}")]
    Parse(String),
}

/// Parser turning raw page text into [`FrontMatter`].
pub trait FrontMatterParser: Send + Sync {
    /// Parse the front matter of `content`.
    ///
    /// # Errors
    ///
    /// Returns [`FrontMatterError`] if the front-matter block is malformed.
    fn parse(&self, content: &str) -> Result<FrontMatter, FrontMatterError>;
}

/// YAML front-matter parser backed by `serde_yaml`.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlFrontMatter;

impl FrontMatterParser for YamlFrontMatter {
    fn parse(&self, content: &str) -> Result<FrontMatter, FrontMatterError> {
        let Some(block) = split_front_matter(content)? else {
            return Ok(FrontMatter::default());
        };

        let trimmed = block.trim();
        if trimmed.is_empty() {
            return Ok(FrontMatter::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontMatterError::Parse(format!("Invalid YAML: {e}")))
    }
}

/// Extract the raw YAML block between the opening and closing `---` lines.
///
/// Returns `Ok(None)` when the content does not start with a `---` line.
fn split_front_matter(content: &str) -> Result<Option<&str>, FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if first.trim_end() != "---" {
        return Ok(None);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            return Ok(Some(&content[start..offset]));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}
