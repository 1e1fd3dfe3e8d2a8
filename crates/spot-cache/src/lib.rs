//! Durable key-value slots for the Spot storefront.
//!
//! A [`KvStore`] holds raw bytes under string keys; [`Cache`] layers JSON
//! serialization on top so callers read and write typed values.
//!
//! # Example
//!
//! ```
//! use spot_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("greeting", &vec!["hello", "world"]).unwrap();
//!
//! let value: Option<Vec<String>> = cache.get("greeting").unwrap();
//! assert_eq!(value.unwrap().len(), 2);
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
