//! Page adjacency for previous/next links.
//!
//! The resolved sidebar is flattened depth-first into the reading order of
//! the docs. Adjacency lookups compare slugs after [`normalize_slug`], so
//! `"docs/b"`, `"/b"` and `"b"` all address the same page.

use serde::Serialize;

use crate::sidebar::SidebarItem;

/// Flattened page: a sidebar item that has a slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdjacentPage {
    /// Display label.
    pub label: String,
    /// Slug as configured.
    pub slug: String,
}

impl AdjacentPage {
    /// Create a page.
    #[must_use]
    pub fn new(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }
}

/// Previous and next pages around a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdjacentPages {
    /// Previous page, `None` for the first page or an unknown slug.
    pub prev: Option<AdjacentPage>,
    /// Next page, `None` for the last page or an unknown slug.
    pub next: Option<AdjacentPage>,
}

/// Flatten a sidebar tree into its pages, depth-first and left to right.
///
/// Items without a slug (or with an empty one) are skipped, their children
/// are still visited.
#[must_use]
pub fn flatten(items: &[SidebarItem]) -> Vec<AdjacentPage> {
    fn visit(item: &SidebarItem, pages: &mut Vec<AdjacentPage>) {
        if let Some(slug) = item.slug.as_ref().filter(|slug| !slug.is_empty()) {
            pages.push(AdjacentPage::new(item.label.clone(), slug.clone()));
        }
        for child in &item.items {
            visit(child, pages);
        }
    }

    let mut pages = Vec::new();
    for item in items {
        visit(item, &mut pages);
    }
    pages
}

/// Normalize a slug for comparison: strip a leading `/`, then a leading
/// `docs/` segment.
#[must_use]
pub fn normalize_slug(slug: &str) -> &str {
    let slug = slug.strip_prefix('/').unwrap_or(slug);
    slug.strip_prefix("docs/").unwrap_or(slug)
}

/// Find the pages before and after `slug`.
///
/// The first page whose normalized slug matches wins. Unknown slugs return
/// [`AdjacentPages::default`].
#[must_use]
pub fn adjacent_pages(pages: &[AdjacentPage], slug: &str) -> AdjacentPages {
    let target = normalize_slug(slug);
    let Some(pos) = pages
        .iter()
        .position(|page| normalize_slug(&page.slug) == target)
    else {
        return AdjacentPages::default();
    };

    AdjacentPages {
        prev: pos.checked_sub(1).map(|i| pages[i].clone()),
        next: pages.get(pos + 1).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn abc() -> Vec<AdjacentPage> {
        vec![
            AdjacentPage::new("A", "a"),
            AdjacentPage::new("B", "b"),
            AdjacentPage::new("C", "c"),
        ]
    }

    fn container(label: &str, items: Vec<SidebarItem>) -> SidebarItem {
        SidebarItem {
            label: label.to_owned(),
            slug: None,
            items,
            badge: None,
            collapsed: None,
        }
    }

    #[test]
    fn test_flatten_depth_first() {
        let mut section = SidebarItem::page("Section", "section");
        section.items = vec![
            SidebarItem::page("Child 1", "section/one"),
            SidebarItem::page("Child 2", "section/two"),
        ];
        let tree = vec![
            SidebarItem::page("Intro", "intro"),
            section,
            container("Group", vec![SidebarItem::page("Leaf", "leaf")]),
        ];

        let pages = flatten(&tree);

        assert_eq!(
            pages,
            vec![
                AdjacentPage::new("Intro", "intro"),
                AdjacentPage::new("Section", "section"),
                AdjacentPage::new("Child 1", "section/one"),
                AdjacentPage::new("Child 2", "section/two"),
                AdjacentPage::new("Leaf", "leaf"),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_empty_containers() {
        let tree = vec![container("Empty", vec![]), container("Also empty", vec![])];

        assert!(flatten(&tree).is_empty());
    }

    #[test]
    fn test_flatten_skips_empty_slug() {
        let mut heading = SidebarItem::page("Heading", "");
        heading.items = vec![SidebarItem::page("Leaf", "leaf")];

        assert_eq!(flatten(&[heading]), vec![AdjacentPage::new("Leaf", "leaf")]);
    }

    #[test]
    fn test_flatten_keeps_original_slugs() {
        let tree = vec![SidebarItem::page("A", "/docs/a")];

        assert_eq!(flatten(&tree)[0].slug, "/docs/a");
    }

    #[test]
    fn test_adjacent_middle() {
        let adjacent = adjacent_pages(&abc(), "b");

        assert_eq!(
            adjacent,
            AdjacentPages {
                prev: Some(AdjacentPage::new("A", "a")),
                next: Some(AdjacentPage::new("C", "c")),
            }
        );
    }

    #[test]
    fn test_adjacent_boundaries() {
        let first = adjacent_pages(&abc(), "a");
        assert_eq!(first.prev, None);
        assert_eq!(first.next, Some(AdjacentPage::new("B", "b")));

        let last = adjacent_pages(&abc(), "c");
        assert_eq!(last.prev, Some(AdjacentPage::new("B", "b")));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_adjacent_unknown_slug() {
        assert_eq!(adjacent_pages(&abc(), "unknown"), AdjacentPages::default());
        assert_eq!(adjacent_pages(&[], "a"), AdjacentPages::default());
    }

    #[test]
    fn test_adjacent_normalized_slugs() {
        let expected = adjacent_pages(&abc(), "b");

        assert_eq!(adjacent_pages(&abc(), "docs/b"), expected);
        assert_eq!(adjacent_pages(&abc(), "/b"), expected);
        assert_eq!(adjacent_pages(&abc(), "/docs/b"), expected);
    }

    #[test]
    fn test_adjacent_page_slugs_are_normalized() {
        let pages = vec![
            AdjacentPage::new("A", "/guides/a"),
            AdjacentPage::new("B", "docs/guides/b"),
            AdjacentPage::new("C", "/docs/guides/c"),
        ];

        let adjacent = adjacent_pages(&pages, "guides/b");

        assert_eq!(adjacent.prev.unwrap().slug, "/guides/a");
        assert_eq!(adjacent.next.unwrap().slug, "/docs/guides/c");
    }

    #[test]
    fn test_adjacent_first_match_wins() {
        let pages = vec![
            AdjacentPage::new("A", "a"),
            AdjacentPage::new("B", "dup"),
            AdjacentPage::new("C", "c"),
            AdjacentPage::new("D", "/dup"),
        ];

        let adjacent = adjacent_pages(&pages, "dup");

        assert_eq!(adjacent.prev.unwrap().label, "A");
        assert_eq!(adjacent.next.unwrap().label, "C");
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("/docs/guides/a"), "guides/a");
        assert_eq!(normalize_slug("docs/guides/a"), "guides/a");
        assert_eq!(normalize_slug("/guides/a"), "guides/a");
        assert_eq!(normalize_slug("docs"), "docs");
        assert_eq!(normalize_slug("docsite/a"), "docsite/a");
    }
}
