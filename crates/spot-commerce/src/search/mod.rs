//! Catalog search module.
//!
//! Contains the query parameters, the filter/sort pipeline and the result
//! container.

mod engine;
mod query;
mod results;

pub use engine::{matches_category, matches_text, query, sort_products};
pub use query::{QuerySpec, SortKey};
pub use results::SearchResults;
