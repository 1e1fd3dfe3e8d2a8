//! Newtype IDs for type-safe identifiers.
//!
//! Keeps product, user and order identifiers from being mixed up even though
//! all three are opaque strings on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);

impl ProductId {
    /// Interpret the ID as a creation counter.
    ///
    /// Catalog IDs are assigned in increasing order, so a higher ordinal is a
    /// newer product. Returns `None` for IDs that are not plain integers.
    pub fn ordinal(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }
}

impl OrderId {
    /// Build an order number from a creation timestamp in milliseconds.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("ORD-{}", millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("12");
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn test_id_from_string() {
        let id: UserId = "user-456".into();
        assert_eq!(id.as_str(), "user-456");
        assert_eq!(format!("{}", id), "user-456");
    }

    #[test]
    fn test_product_ordinal() {
        assert_eq!(ProductId::new("42").ordinal(), Some(42));
        assert_eq!(ProductId::new("sku-42").ordinal(), None);
        assert_eq!(ProductId::new("").ordinal(), None);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_order_id_from_timestamp() {
        assert_eq!(OrderId::from_timestamp_millis(1700).as_str(), "ORD-1700");
    }
}
