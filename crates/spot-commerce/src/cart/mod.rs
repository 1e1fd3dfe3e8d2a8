//! Shopping cart module.
//!
//! Contains the cart and line items, the persistent cart engine and pricing.

mod cart;
mod engine;
mod pricing;

pub use cart::{clamp_quantity, Cart, LineItem};
pub use engine::{CartEngine, CART_STORAGE_KEY};
pub use pricing::{CartPricing, PricingConfig};
