//! Search results.

use crate::catalog::Product;

/// Products matched by a query, plus the size of the snapshot they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    /// Matching products in display order.
    pub items: Vec<&'a Product>,
    /// Number of products in the snapshot.
    pub total: usize,
}

impl<'a> SearchResults<'a> {
    pub fn new(items: Vec<&'a Product>, total: usize) -> Self {
        Self { items, total }
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Listing header, e.g. "Showing 3 of 12 products".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;

    #[test]
    fn test_summary() {
        let product = Product::new("1", "Scarf", Money::usd(1500), Category::Clothing);
        let results = SearchResults::new(vec![&product], 12);
        assert_eq!(results.len(), 1);
        assert!(!results.is_empty());
        assert_eq!(results.summary(), "Showing 1 of 12 products");
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::new(Vec::new(), 0);
        assert!(results.is_empty());
        assert_eq!(results.summary(), "Showing 0 of 0 products");
    }
}
