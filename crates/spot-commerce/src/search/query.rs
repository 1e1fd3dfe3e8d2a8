//! Query parameters for the catalog engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Featured products first, otherwise snapshot order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::Newest,
    ];

    /// URL token (e.g., `price-asc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }

    /// Parse a URL token. Unknown tokens fall back to [`SortKey::Featured`].
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(token))
            .unwrap_or_default()
    }
}

impl From<String> for SortKey {
    fn from(token: String) -> Self {
        SortKey::parse(&token)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized search, filter and sort parameters.
///
/// An empty search term and an empty category set both mean "no
/// restriction". Deserialized specs go through the same slug normalization
/// as [`QuerySpec::with_category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQuerySpec")]
pub struct QuerySpec {
    /// Case-insensitive substring matched against name, description and
    /// category.
    pub search: String,
    /// Selected category slugs (OR).
    pub categories: BTreeSet<String>,
    /// Only show in-stock products.
    pub in_stock_only: bool,
    /// Only show featured products.
    pub featured_only: bool,
    /// Sort order.
    pub sort: SortKey,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Add a category slug to the selection.
    pub fn with_category(mut self, slug: impl AsRef<str>) -> Self {
        if let Some(slug) = normalize_slug(slug.as_ref()) {
            self.categories.insert(slug);
        }
        self
    }

    pub fn with_categories<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for slug in slugs {
            self = self.with_category(slug);
        }
        self
    }

    pub fn in_stock_only(mut self, on: bool) -> Self {
        self.in_stock_only = on;
        self
    }

    pub fn featured_only(mut self, on: bool) -> Self {
        self.featured_only = on;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select a category if unselected, deselect it otherwise.
    pub fn toggle_category(&mut self, slug: &str) {
        if let Some(slug) = normalize_slug(slug) {
            if !self.categories.remove(&slug) {
                self.categories.insert(slug);
            }
        }
    }

    /// Number of active filters, as shown on the filter badge.
    ///
    /// The featured flag and sort order are not counted.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + usize::from(self.in_stock_only) + usize::from(!self.search.is_empty())
    }

    /// Reset every parameter to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build a spec from URL query parameters.
    ///
    /// Recognized keys: `search`, `category` (comma-separated), `featured`,
    /// `in_stock` and `sort`. Unknown keys are ignored.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = Self::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "search" => spec.search = value.to_string(),
                "category" => {
                    spec = spec.with_categories(value.split(','));
                }
                "featured" => spec.featured_only = parse_flag(value),
                "in_stock" => spec.in_stock_only = parse_flag(value),
                "sort" => spec.sort = SortKey::parse(value),
                _ => {}
            }
        }
        spec
    }

    /// Encode the non-default parameters as URL query pairs.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if !self.categories.is_empty() {
            let joined = self.categories.iter().cloned().collect::<Vec<_>>().join(",");
            params.push(("category", joined));
        }
        if self.featured_only {
            params.push(("featured", "true".to_string()));
        }
        if self.in_stock_only {
            params.push(("in_stock", "true".to_string()));
        }
        if self.sort != SortKey::default() {
            params.push(("sort", self.sort.as_str().to_string()));
        }
        params
    }
}

/// Wire shape of [`QuerySpec`] before normalization.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawQuerySpec {
    search: String,
    categories: Vec<String>,
    in_stock_only: bool,
    featured_only: bool,
    sort: SortKey,
}

impl From<RawQuerySpec> for QuerySpec {
    fn from(raw: RawQuerySpec) -> Self {
        QuerySpec::new()
            .with_search(raw.search)
            .with_categories(raw.categories)
            .in_stock_only(raw.in_stock_only)
            .featured_only(raw.featured_only)
            .with_sort(raw.sort)
    }
}

fn normalize_slug(slug: &str) -> Option<String> {
    let slug = slug.trim();
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_lowercase())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
