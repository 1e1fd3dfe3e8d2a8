//! Address types.

use serde::{Deserialize, Serialize};

/// A shipping address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Recipient name.
    pub name: String,
    /// Street line.
    pub street: String,
    pub city: String,
    /// State/province code (e.g., "CA").
    pub state: String,
    /// Postal/ZIP code.
    pub zip: String,
}

impl Address {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// "City, State", as shown in the order list.
    pub fn city_state(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }

    /// Check that no field is blank.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.street, &self.city, &self.state, &self.zip]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}
