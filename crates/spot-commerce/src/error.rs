//! Commerce error types.
//!
//! The catalog engine is total. The cart only refuses a product priced in a
//! different currency than the lines it already holds. Other errors come from
//! loading catalog data, validating admin-supplied products and the checkout
//! preconditions.

use crate::money::Currency;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is out of stock and cannot be added.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Checkout attempted without a signed-in user.
    #[error("Sign in required to check out")]
    NotAuthenticated,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product priced in another currency than the cart.
    #[error("Cart is priced in {expected}, product is priced in {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<spot_cache::CacheError> for CommerceError {
    fn from(e: spot_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
