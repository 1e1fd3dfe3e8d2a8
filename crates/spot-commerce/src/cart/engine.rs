//! Persistent cart engine.

use crate::cart::{Cart, CartPricing, LineItem, PricingConfig};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use spot_cache::{Cache, KvStore};

/// Slot the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "spot-ecommerce-cart";

/// Owns the session's [`Cart`] and mirrors it into a durable slot.
///
/// Every mutation that changes the cart writes the whole line-item array.
/// Storage failures never reach the caller: a bad slot on load yields an
/// empty cart and a failed write is logged and dropped. The only refused
/// mutation is adding a product priced in another currency than the cart.
///
/// # Example
///
/// ```
/// use spot_cache::MemoryStore;
/// use spot_commerce::prelude::*;
///
/// let store = MemoryStore::new();
/// let lamp = Product::new("1", "Desk Lamp", Money::usd(3499), Category::Home);
///
/// let mut engine = CartEngine::load(store.clone());
/// engine.add_item(&lamp, 2)?;
///
/// // A fresh engine over the same store sees the persisted cart.
/// let reloaded = CartEngine::load(store);
/// assert_eq!(reloaded.item_count(), 2);
/// # Ok::<(), CommerceError>(())
/// ```
#[derive(Debug)]
pub struct CartEngine<S: KvStore> {
    cart: Cart,
    cache: Cache<S>,
    key: String,
}

impl<S: KvStore> CartEngine<S> {
    /// Rehydrate from the default slot.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, CART_STORAGE_KEY)
    }

    /// Rehydrate from a custom slot, e.g. one namespaced per user.
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cache = Cache::new(store);
        let cart = match cache.get::<Cart>(&key) {
            Ok(Some(cart)) => {
                tracing::debug!(key = %key, lines = cart.len(), "restored cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        };
        Self { cart, cache, key }
    }

    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// See [`Cart::add_item`] for the normalization rules. A refused product
    /// leaves the cart and the slot untouched.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<u32, CommerceError> {
        let new_quantity = self.cart.add_item(product.clone(), quantity)?;
        tracing::debug!(product_id = %product.id, quantity = new_quantity, "add to cart");
        self.persist();
        Ok(new_quantity)
    }

    /// Remove a product. Absent products are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<LineItem> {
        let removed = self.cart.remove_item(product_id);
        if removed.is_some() {
            tracing::debug!(product_id = %product_id, "remove from cart");
            self.persist();
        }
        removed
    }

    /// Replace a product's quantity; `quantity <= 0` removes it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            tracing::debug!(product_id = %product_id, quantity, "update cart quantity");
            self.persist();
        }
        changed
    }

    pub fn clear(&mut self) {
        if self.cart.clear() {
            tracing::debug!("clear cart");
            self.persist();
        }
    }

    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.cart.is_in_cart(product_id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.cart.items()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Shipping, tax and total for the current contents.
    pub fn pricing(&self, config: &PricingConfig) -> CartPricing {
        CartPricing::calculate(self.cart.subtotal(), config)
    }

    /// Slot key this engine persists to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Currency;
    use spot_cache::{CacheError, MemoryStore};
    use std::cell::Cell;

    fn lamp() -> Product {
        Product::new("1", "Desk Lamp", Money::usd(3499), Category::Home)
    }

    fn mug() -> Product {
        Product::new("2", "Mug", Money::usd(1200), Category::Home)
    }

    /// Store whose writes always fail and that counts attempts.
    #[derive(Default)]
    struct BrokenStore {
        writes: Cell<usize>,
    }

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Err(CacheError::StoreError("offline".into()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            self.writes.set(self.writes.get() + 1);
            Err(CacheError::StoreError("quota exceeded".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_starts_empty_without_slot() {
        let engine = CartEngine::load(MemoryStore::new());
        assert!(engine.is_empty());
        assert_eq!(engine.key(), CART_STORAGE_KEY);
    }

    #[test]
    fn test_mutations_persist() {
        let store = MemoryStore::new();
        let mut engine = CartEngine::load(store.clone());
        engine.add_item(&lamp(), 1).unwrap();
        engine.add_item(&mug(), 3).unwrap();
        engine.update_quantity(&ProductId::new("1"), 4);

        let reloaded = CartEngine::load(store);
        assert_eq!(reloaded.item_count(), 7);
        assert_eq!(reloaded.cart(), engine.cart());
        let order: Vec<&str> = reloaded.items().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2"]);
    }

    #[test]
    fn test_clear_persists_empty_array() {
        let store = MemoryStore::new();
        let mut engine = CartEngine::load(store.clone());
        engine.add_item(&lamp(), 1).unwrap();
        engine.clear();

        assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_noops_do_not_write() {
        let store = MemoryStore::new();
        let mut engine = CartEngine::load(store.clone());

        engine.remove_item(&ProductId::new("1"));
        engine.update_quantity(&ProductId::new("1"), 3);
        engine.clear();

        assert!(!store.exists(CART_STORAGE_KEY).unwrap());
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_empty() {
        let store = MemoryStore::new();
        store.set(CART_STORAGE_KEY, b"{\"oops\": tru").unwrap();

        let mut engine = CartEngine::load(store.clone());
        assert!(engine.is_empty());

        // the next mutation overwrites the bad value
        engine.add_item(&mug(), 1).unwrap();
        let reloaded = CartEngine::load(store);
        assert_eq!(reloaded.item_count(), 1);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_empty() {
        let store = MemoryStore::new();
        store.set(CART_STORAGE_KEY, br#"[{"product": 1, "quantity": -2}]"#).unwrap();
        assert!(CartEngine::load(store).is_empty());
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut engine = CartEngine::load(BrokenStore::default());
        assert!(engine.is_empty());

        engine.add_item(&lamp(), 2).unwrap();
        engine.remove_item(&ProductId::new("1"));

        assert!(engine.is_empty());
        assert_eq!(engine.store().writes.get(), 2);
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut engine = CartEngine::load_with_key(store.clone(), "cart:user-1");
        engine.add_item(&lamp(), 1).unwrap();

        assert!(store.exists("cart:user-1").unwrap());
        assert!(CartEngine::load(store).is_empty());
    }

    #[test]
    fn test_other_currency_is_refused_without_writing() {
        let store = MemoryStore::new();
        let mut engine = CartEngine::load(store.clone());
        engine.add_item(&lamp(), 1).unwrap();
        let before = store.get(CART_STORAGE_KEY).unwrap();

        let euro = Product::new("3", "Euro Vase", Money::new(2000, Currency::EUR), Category::Home);
        assert!(matches!(
            engine.add_item(&euro, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));

        assert_eq!(engine.item_count(), 1);
        assert_eq!(engine.subtotal(), Money::usd(3499));
        assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn test_pricing() {
        let mut engine = CartEngine::load(MemoryStore::new());
        engine.add_item(&lamp(), 2).unwrap();

        let pricing = engine.pricing(&PricingConfig::default());
        assert_eq!(pricing.subtotal, Money::usd(6998));
        assert!(pricing.is_free_shipping());
        assert_eq!(pricing.tax, Money::usd(560));
        assert_eq!(pricing.grand_total, Money::usd(7558));
    }
}
