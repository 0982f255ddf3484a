//! Sidebar configuration items.
//!
//! The `[[sidebar]]` array of `catalog.toml` describes the navigation tree.
//! Each item is one of three shapes, told apart by its fields:
//!
//! ```toml
//! # Auto-generated: one page per file in docs/guides
//! [[sidebar]]
//! label = "Guides"
//! autogenerated = { directory = "guides" }
//!
//! # Group: explicit children
//! [[sidebar]]
//! label = "Reference"
//! collapsed = true
//! [[sidebar.items]]
//! label = "API"
//! slug = "reference/api"
//!
//! # Link: a single page
//! [[sidebar]]
//! label = "Introduction"
//! slug = "docs/intro"
//! ```
//!
//! Unknown keys are rejected, so a misspelled `autogenerated` table fails to
//! load instead of silently turning the item into a link.

use serde::{Deserialize, Serialize};

/// Badge shown next to a sidebar label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge text.
    pub text: String,
    /// Badge color (CSS color or theme token).
    pub color: String,
}

/// Directory reference of an auto-generated sidebar item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogeneratedDir {
    /// Directory relative to the docs root.
    pub directory: String,
}

/// Author-facing sidebar configuration item.
///
/// An item with an `autogenerated` table is
/// [`Autogenerated`](Self::Autogenerated), an item with `items` is a
/// [`Group`](Self::Group), anything else is a [`Link`](Self::Link).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawSidebarItem")]
pub enum SidebarConfigItem {
    /// Expands to one page per file of a docs directory.
    Autogenerated {
        /// Group label.
        label: String,
        /// Directory to list.
        autogenerated: AutogeneratedDir,
        /// Optional badge.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<Badge>,
        /// Whether the group starts collapsed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
    /// Group with explicit children.
    Group {
        /// Group label.
        label: String,
        /// Optional group page.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
        /// Child items.
        items: Vec<SidebarConfigItem>,
        /// Optional badge.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<Badge>,
        /// Whether the group starts collapsed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
    /// Single page.
    Link {
        /// Link label.
        label: String,
        /// Page slug.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
        /// Optional badge.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<Badge>,
        /// Whether the item starts collapsed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
    },
}

/// Sidebar item as written in TOML, before its shape is decided.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSidebarItem {
    label: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    items: Option<Vec<SidebarConfigItem>>,
    #[serde(default)]
    autogenerated: Option<AutogeneratedDir>,
    #[serde(default)]
    badge: Option<Badge>,
    #[serde(default)]
    collapsed: Option<bool>,
}

impl TryFrom<RawSidebarItem> for SidebarConfigItem {
    type Error = String;

    fn try_from(raw: RawSidebarItem) -> Result<Self, Self::Error> {
        let RawSidebarItem {
            label,
            slug,
            items,
            autogenerated,
            badge,
            collapsed,
        } = raw;

        match (autogenerated, items) {
            (Some(_), Some(_)) => Err(format!(
                "sidebar item {label:?} can't have both `autogenerated` and `items`"
            )),
            (Some(_), None) if slug.is_some() => Err(format!(
                "sidebar item {label:?} can't have both `autogenerated` and `slug`"
            )),
            (Some(autogenerated), None) => Ok(Self::Autogenerated {
                label,
                autogenerated,
                badge,
                collapsed,
            }),
            (None, Some(items)) => Ok(Self::Group {
                label,
                slug,
                items,
                badge,
                collapsed,
            }),
            (None, None) => Ok(Self::Link {
                label,
                slug,
                badge,
                collapsed,
            }),
        }
    }
}

impl SidebarConfigItem {
    /// Create a link item.
    #[must_use]
    pub fn link(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            slug: Some(slug.into()),
            badge: None,
            collapsed: None,
        }
    }

    /// Create a group item.
    #[must_use]
    pub fn group(label: impl Into<String>, items: Vec<SidebarConfigItem>) -> Self {
        Self::Group {
            label: label.into(),
            slug: None,
            items,
            badge: None,
            collapsed: None,
        }
    }

    /// Create an auto-generated item.
    #[must_use]
    pub fn autogenerated(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::Autogenerated {
            label: label.into(),
            autogenerated: AutogeneratedDir {
                directory: directory.into(),
            },
            badge: None,
            collapsed: None,
        }
    }

    /// Item label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Autogenerated { label, .. }
            | Self::Group { label, .. }
            | Self::Link { label, .. } => label,
        }
    }
}
