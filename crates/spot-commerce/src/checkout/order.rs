//! Orders and order history.

use crate::cart::{CartEngine, CartPricing, LineItem, PricingConfig};
use crate::checkout::{Address, Session, User};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spot_cache::KvStore;
use std::fmt;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line in a placed order, frozen at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Unit price at time of order.
    pub unit_price: Money,
    pub quantity: u32,
    /// Total price for this line.
    pub total: Money,
}

impl From<&LineItem> for OrderLineItem {
    fn from(line: &LineItem) -> Self {
        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            total: line.line_total(),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Customer the order is attributed to.
    pub user_id: UserId,
    pub items: Vec<OrderLineItem>,
    /// Totals as shown at checkout.
    pub pricing: CartPricing,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn total(&self) -> Money {
        self.pricing.grand_total
    }
}

/// Turn the cart into an order for the signed-in user.
///
/// Requires an authenticated session, a non-empty cart and a complete
/// address. On success the cart is cleared, which also persists the empty
/// cart. On failure nothing changes.
pub fn place_order<S: KvStore>(
    cart: &mut CartEngine<S>,
    session: &Session,
    shipping_address: Address,
    config: &PricingConfig,
    placed_at: DateTime<Utc>,
) -> Result<Order, CommerceError> {
    let user_id = session
        .user_id()
        .cloned()
        .ok_or(CommerceError::NotAuthenticated)?;
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    if !shipping_address.is_complete() {
        return Err(CommerceError::ValidationError(
            "shipping address is incomplete".to_string(),
        ));
    }

    let order = Order {
        id: OrderId::from_timestamp_millis(placed_at.timestamp_millis()),
        user_id,
        items: cart.items().map(OrderLineItem::from).collect(),
        pricing: cart.pricing(config),
        status: OrderStatus::Pending,
        shipping_address,
        created_at: placed_at,
    };
    cart.clear();

    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        items = order.item_count(),
        total = %order.total(),
        "order placed"
    );
    Ok(order)
}

/// In-memory list of placed orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders the user may see: their own, or all of them for admins.
    pub fn visible_to(&self, user: &User) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| user.is_admin() || o.user_id == user.id)
            .collect()
    }

    /// Case-insensitive match on order ID or status.
    pub fn search(&self, term: &str) -> Vec<&Order> {
        let term = term.to_lowercase();
        self.orders
            .iter()
            .filter(|o| {
                o.id.as_str().to_lowercase().contains(&term) || o.status.as_str().contains(&term)
            })
            .collect()
    }

    /// Change an order's status. Returns whether the order was found.
    pub fn set_status(&mut self, order_id: &OrderId, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| &o.id == order_id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    /// Sum of grand totals over all orders.
    pub fn total_revenue(&self, currency: Currency) -> Money {
        let totals: Vec<Money> = self.orders.iter().map(Order::total).collect();
        Money::saturating_sum(totals.iter(), currency)
    }
}
