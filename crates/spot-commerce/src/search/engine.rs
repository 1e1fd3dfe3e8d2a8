//! Catalog query pipeline.
//!
//! Filters run in a fixed order (text, category, featured, stock) and the
//! result is then sorted with a stable sort. Nothing is cached; every call
//! recomputes from the full slice it is given.

use crate::catalog::Product;
use crate::search::{QuerySpec, SortKey};
use std::cmp::Ordering;

/// Filter and sort `products` according to `spec`.
pub fn query<'a>(products: &'a [Product], spec: &QuerySpec) -> Vec<&'a Product> {
    let needle = spec.search.to_lowercase();

    let mut result: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || matches_text(p, &needle))
        .filter(|p| matches_category(p, spec))
        .filter(|p| !spec.featured_only || p.featured)
        .filter(|p| !spec.in_stock_only || p.in_stock)
        .collect();

    sort_products(&mut result, spec.sort);

    tracing::debug!(
        matched = result.len(),
        total = products.len(),
        sort = %spec.sort,
        "catalog query"
    );
    result
}

/// Case-insensitive substring match on name, description or category.
///
/// `needle` must already be lowercase.
pub fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.slug().contains(needle)
}

/// Whether the product's category is in the selected set. An empty set
/// matches everything.
pub fn matches_category(product: &Product, spec: &QuerySpec) -> bool {
    spec.categories.is_empty() || spec.categories.contains(product.category.slug())
}

/// Stable sort by the given key.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Featured => products.sort_by_key(|p| !p.featured),
        SortKey::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
        }
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by(|a, b| newest_first(a, b)),
    }
}

// Numeric IDs descending; non-numeric IDs after all numeric ones.
fn newest_first(a: &Product, b: &Product) -> Ordering {
    match (a.id.ordinal(), b.id.ordinal()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
