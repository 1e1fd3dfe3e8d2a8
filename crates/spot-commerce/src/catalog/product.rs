//! Product type.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are immutable from the engines' point of view. The cart embeds a
/// full copy per line item so a persisted cart renders without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Category.
    pub category: Category,
    /// Average rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Whether the product is promoted on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Create an in-stock, non-featured product with no reviews.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            category,
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            featured: false,
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Whole-percent discount off the original price, `0` when not on sale.
    pub fn discount_percentage(&self) -> u32 {
        match self.original_price {
            Some(op) if op.amount_cents > self.price.amount_cents && op.amount_cents > 0 => {
                let savings = (op.amount_cents - self.price.amount_cents) as f64;
                (savings / op.amount_cents as f64 * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Check the rules the admin product form enforces.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price.amount_cents <= 0 {
            return Err(CommerceError::ValidationError(format!(
                "product {} must have a positive price",
                self.id
            )));
        }
        if let Some(op) = self.original_price {
            if op.currency != self.price.currency || op.amount_cents < self.price.amount_cents {
                return Err(CommerceError::ValidationError(format!(
                    "product {} original price {} is below price {}",
                    self.id, op, self.price
                )));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::ValidationError(format!(
                "product {} rating {} is outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product::new("1", "Wireless Headphones", Money::usd(7999), Category::Electronics)
            .with_original_price(Money::usd(9999))
            .with_rating(4.5, 128)
    }

    #[test]
    fn test_discount_percentage() {
        let product = headphones();
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percentage(), 20);
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let product = Product::new("2", "Mug", Money::usd(1200), Category::Home);
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percentage(), 0);
    }

    #[test]
    fn test_validate_accepts_catalog_product() {
        assert!(headphones().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let cheap_original = headphones().with_original_price(Money::usd(100));
        assert!(cheap_original.validate().is_err());

        let bad_rating = headphones().with_rating(5.5, 1);
        assert!(bad_rating.validate().is_err());

        let free = Product::new("3", "Sticker", Money::usd(0), Category::Home);
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let product = Product::new("9", "Yoga Mat", Money::usd(2999), Category::Sports);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "9");
        assert_eq!(value["category"], "sports");
        assert_eq!(value["price"]["amount_cents"], 2999);
        assert!(value.get("original_price").is_none());

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }
}
