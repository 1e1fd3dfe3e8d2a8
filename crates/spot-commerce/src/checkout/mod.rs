//! Checkout module.
//!
//! Contains the signed-in user signal, addresses, orders and order history.

mod address;
mod order;
mod session;

pub use address::Address;
pub use order::{place_order, Order, OrderHistory, OrderLineItem, OrderStatus};
pub use session::{Role, Session, User};
