//! Checkout command.

use anyhow::{Context as _, Result};
use chrono::Utc;
use spot_commerce::prelude::*;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let role = if args.admin { Role::Admin } else { Role::Customer };
    let session = Session::signed_in(User::new(args.user, args.name.clone(), args.email).with_role(role));
    let address = Address::new(args.name, args.street, args.city, args.state, args.zip);

    let mut cart = ctx.cart()?;
    let order = place_order(&mut cart, &session, address, ctx.pricing(), Utc::now())
        .context("Checkout failed")?;

    let mut history = ctx.orders()?;
    history.push(order.clone());
    ctx.save_orders(&history)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    print_order(&order, ctx);
    ctx.output.success(&format!("Order {} placed", order.id));
    Ok(())
}

/// Print an order's lines and totals.
pub fn print_order(order: &Order, ctx: &Context) {
    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("status", &status_badge(order.status));
    ctx.output.kv("customer", order.user_id.as_str());
    ctx.output
        .kv("placed", &order.created_at.format("%Y-%m-%d %H:%M UTC").to_string());
    ctx.output.kv("ship to", &order.shipping_address.one_line());

    for item in &order.items {
        ctx.output.list_item(&format!(
            "{} × {} @ {} = {}",
            item.quantity, item.name, item.unit_price, item.total
        ));
    }

    ctx.output.kv("subtotal", &order.pricing.subtotal.to_string());
    ctx.output.kv("shipping", &order.pricing.shipping.to_string());
    ctx.output.kv("tax", &order.pricing.tax.to_string());
    ctx.output.kv("total", &order.total().to_string());
}
