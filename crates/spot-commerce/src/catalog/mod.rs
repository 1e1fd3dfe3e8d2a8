//! Product catalog module.
//!
//! Contains the product and category types and the read-only catalog
//! snapshot the query engine runs over.

mod category;
mod product;
mod snapshot;

pub use category::Category;
pub use product::{Product, MAX_RATING};
pub use snapshot::Catalog;
