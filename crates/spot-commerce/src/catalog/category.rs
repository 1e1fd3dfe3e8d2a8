//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of storefront categories.
///
/// Serialized as the URL slug, which is also what the category filter and
/// the free-text search match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
    Beauty,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Sports,
        Category::Books,
        Category::Beauty,
    ];

    /// URL-friendly slug.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Sports => "sports",
            Category::Books => "books",
            Category::Beauty => "beauty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home & Living",
            Category::Sports => "Sports & Outdoors",
            Category::Books => "Books",
            Category::Beauty => "Beauty",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Electronics => "\u{1f4f1}",
            Category::Clothing => "\u{1f455}",
            Category::Home => "\u{1f3e0}",
            Category::Sports => "\u{26bd}",
            Category::Books => "\u{1f4da}",
            Category::Beauty => "\u{1f484}",
        }
    }

    /// Parse a slug, ignoring case and surrounding whitespace.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_from_slug_is_lenient() {
        assert_eq!(Category::from_slug(" Books "), Some(Category::Books));
        assert_eq!(Category::from_slug("toys"), None);
    }

    #[test]
    fn test_serializes_as_slug() {
        let json = serde_json::to_string(&Category::Home).unwrap();
        assert_eq!(json, "\"home\"");
        let parsed: Category = serde_json::from_str("\"sports\"").unwrap();
        assert_eq!(parsed, Category::Sports);
    }
}
