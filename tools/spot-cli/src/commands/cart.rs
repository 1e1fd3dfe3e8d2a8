//! Cart commands.

use anyhow::Result;
use serde_json::json;
use spot_cache::FileStore;
use spot_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            let catalog = ctx.catalog()?;
            let product = find_purchasable(&catalog, &ProductId::new(id))?;
            let total = cart.add_item(product, quantity)?;
            ctx.output
                .success(&format!("{} × {} in cart", total, product.name));
        }
        CartCommand::Remove { id } => match cart.remove_item(&ProductId::new(id.as_str())) {
            Some(line) => ctx
                .output
                .success(&format!("Removed {} from cart", line.product.name)),
            None => ctx.output.warn(&format!("{} is not in the cart", id)),
        },
        CartCommand::Update { id, quantity } => {
            let id = ProductId::new(id);
            if !cart.update_quantity(&id, quantity) {
                ctx.output.warn(&format!("{} is not in the cart", id));
            } else if quantity <= 0 {
                ctx.output.success(&format!("Removed {} from cart", id));
            } else {
                ctx.output
                    .success(&format!("Set {} to quantity {}", id, quantity));
            }
        }
        CartCommand::Clear => {
            cart.clear();
            ctx.output.success("Cart cleared");
        }
    }

    show(&cart, ctx);
    Ok(())
}

/// The caller-side stock check: only known, in-stock products may be added.
fn find_purchasable<'a>(catalog: &'a Catalog, id: &ProductId) -> Result<&'a Product, CommerceError> {
    let product = catalog
        .get(id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
    if !product.in_stock {
        return Err(CommerceError::OutOfStock(product.name.clone()));
    }
    Ok(product)
}

fn show(cart: &CartEngine<FileStore>, ctx: &Context) {
    let pricing = cart.pricing(ctx.pricing());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.cart(),
            "item_count": cart.item_count(),
            "pricing": pricing,
        }));
        return;
    }

    ctx.output
        .header(&format!("Shopping Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    let widths = [6, 28, 10, 5, 12];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "TOTAL"], &widths);
    for line in cart.items() {
        ctx.output.table_row(
            &[
                line.product.id.as_str(),
                &line.product.name,
                &line.product.price.to_string(),
                &line.quantity.to_string(),
                &line.line_total().to_string(),
            ],
            &widths,
        );
    }

    ctx.output.header("Summary");
    ctx.output.kv("subtotal", &pricing.subtotal.to_string());
    if pricing.is_free_shipping() {
        ctx.output.kv("shipping", "FREE");
    } else {
        ctx.output.kv("shipping", &pricing.shipping.to_string());
    }
    ctx.output.kv("tax", &pricing.tax.to_string());
    ctx.output.kv("total", &pricing.grand_total.to_string());
    if let Some(remaining) = pricing.amount_until_free_shipping() {
        ctx.output
            .info(&format!("Add {} more for free shipping", remaining));
    }
}
