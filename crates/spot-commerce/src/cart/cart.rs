//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// A product and how many of it are in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Full product copy, so a restored cart renders without the catalog.
    pub product: Product,
    /// Quantity, always at least 1 inside a [`Cart`].
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_multiply(i64::from(self.quantity))
    }
}

/// Clamp a caller-supplied quantity for [`Cart::add_item`] into `1..=u32::MAX`.
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, i64::from(u32::MAX)) as u32
}

/// A shopping cart.
///
/// Holds at most one line item per product ID. New products are appended;
/// existing ones are updated in place, so display order is insertion order.
/// Aggregates are recomputed on every read.
///
/// Serializes as a JSON array of `{ "product": ..., "quantity": n }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<LineItem>")]
pub struct Cart {
    items: IndexMap<ProductId, LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw line items, repairing what a hand-edited or
    /// stale slot might contain: zero quantities are dropped, duplicate
    /// products are merged and lines in another currency than the first
    /// line are dropped.
    pub fn from_lines(lines: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            let product_id = line.product.id.clone();
            if let Err(e) = cart.add_item(line.product, i64::from(line.quantity)) {
                tracing::warn!(product_id = %product_id, error = %e, "dropping cart line");
            }
        }
        cart
    }

    /// Add `quantity` of `product`.
    ///
    /// Merges into an existing line by summing quantities; otherwise appends
    /// a new line. Quantities below 1 are treated as 1 and totals saturate at
    /// `u32::MAX`. Stock is not checked. Returns the line's new quantity.
    ///
    /// A non-empty cart only accepts products priced in its currency, so the
    /// subtotal always covers every line.
    pub fn add_item(&mut self, product: Product, quantity: i64) -> Result<u32, CommerceError> {
        if !self.is_empty() && product.price.currency != self.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency(),
                found: product.price.currency,
            });
        }

        let quantity = clamp_quantity(quantity);
        let new_quantity = match self.items.get_mut(&product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.items
                    .insert(product.id.clone(), LineItem::new(product, quantity));
                quantity
            }
        };
        Ok(new_quantity)
    }

    /// Remove the line for `product_id`. Returns the removed line, `None` if
    /// the product was not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<LineItem> {
        self.items.shift_remove(product_id)
    }

    /// Set the quantity for `product_id` to exactly `quantity`.
    ///
    /// A quantity of 0 or less removes the line. Products not in the cart are
    /// left alone. Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id).is_some();
        }
        match self.items.get_mut(product_id) {
            Some(line) => {
                let quantity = clamp_quantity(quantity);
                let changed = line.quantity != quantity;
                line.quantity = quantity;
                changed
            }
            None => false,
        }
    }

    /// Remove every line. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.items.contains_key(product_id)
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.get(product_id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|l| u64::from(l.quantity)).sum()
    }

    /// Currency of the cart, taken from the first line.
    pub fn currency(&self) -> Currency {
        self.items
            .values()
            .next()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }

    /// Sum of price times quantity over all lines, in exact cents.
    pub fn subtotal(&self) -> Money {
        let totals: Vec<Money> = self.items.values().map(LineItem::line_total).collect();
        Money::saturating_sum(totals.iter(), self.currency())
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(lines: Vec<LineItem>) -> Self {
        Self::from_lines(lines)
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.values())
    }
}
