//! Read-only catalog snapshot.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{self, QuerySpec, SearchResults};

/// The full product set for a session.
///
/// Built once at startup and never mutated. Snapshot order is the order the
/// products were supplied in; stable sorts fall back to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Featured products in snapshot order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Other products in the same category, at most `limit` of them.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Run a query against the whole snapshot.
    pub fn search(&self, spec: &QuerySpec) -> SearchResults<'_> {
        SearchResults::new(search::query(&self.products, spec), self.products.len())
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("1", "Laptop", Money::usd(99900), Category::Electronics).with_featured(true),
            Product::new("2", "Phone", Money::usd(69900), Category::Electronics),
            Product::new("3", "Hoodie", Money::usd(4500), Category::Clothing).with_featured(true),
            Product::new("4", "Tablet", Money::usd(39900), Category::Electronics),
        ])
    }

    #[test]
    fn test_get() {
        let catalog = catalog();
        assert_eq!(catalog.get(&ProductId::new("3")).unwrap().name, "Hoodie");
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_featured() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let catalog = catalog();
        let laptop = catalog.get(&ProductId::new("1")).unwrap();

        let related: Vec<&str> = catalog.related(laptop, 4).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(related, vec!["2", "4"]);

        assert_eq!(catalog.related(laptop, 1).len(), 1);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "5",
            "name": "Novel",
            "description": "A page turner",
            "price": {"amount_cents": 1499, "currency": "USD"},
            "category": "books",
            "rating": 4.1,
            "reviews": 12,
            "in_stock": false,
            "image": "/img/novel.jpg"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let novel = &catalog.products()[0];
        assert!(!novel.in_stock);
        assert!(!novel.featured);
        assert_eq!(novel.original_price, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
