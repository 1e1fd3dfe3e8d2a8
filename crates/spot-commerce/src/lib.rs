//! Cart and catalog engines for the Spot storefront.
//!
//! This crate holds the storefront's state and derived data:
//!
//! - **Catalog**: Products, categories and the read-only session snapshot
//! - **Search**: Text search, category/featured/stock filters and sorting
//! - **Cart**: Line items with merge-on-add semantics, persisted after every
//!   change, plus shipping/tax pricing
//! - **Checkout**: Order attribution for the signed-in user and order history
//!
//! # Example
//!
//! ```
//! use spot_cache::MemoryStore;
//! use spot_commerce::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("1", "Desk Lamp", Money::usd(3499), Category::Home).with_featured(true),
//!     Product::new("2", "Novel", Money::usd(1499), Category::Books),
//! ]);
//!
//! let spec = QuerySpec::new().with_category("home").with_sort(SortKey::PriceDesc);
//! let results = catalog.search(&spec);
//! assert_eq!(results.len(), 1);
//!
//! let mut cart = CartEngine::load(MemoryStore::new());
//! cart.add_item(results.items[0], 1)?;
//! cart.add_item(results.items[0], 2)?;
//! assert_eq!(cart.item_count(), 3);
//!
//! let pricing = cart.pricing(&PricingConfig::default());
//! println!("Total: {}", pricing.grand_total.display());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartEngine, CartPricing, LineItem, PricingConfig, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        place_order, Address, Order, OrderHistory, OrderLineItem, OrderStatus, Role, Session,
        User,
    };

    // Search
    pub use crate::search::{QuerySpec, SearchResults, SortKey};
}
