//! Product detail view.

use anyhow::{bail, Result};
use serde_json::json;
use spot_commerce::prelude::*;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(args.id);
    let Some(product) = catalog.get(&id) else {
        bail!("Product not found: {}", id);
    };
    let related = catalog.related(product, args.related);
    let in_cart = ctx.cart()?.is_in_cart(&product.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "discount_percentage": product.discount_percentage(),
            "in_cart": in_cart,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv(
        "category",
        &format!("{} {}", product.category.icon(), product.category.display_name()),
    );
    match product.original_price {
        Some(original) if product.is_on_sale() => ctx.output.kv(
            "price",
            &format!(
                "{} (was {}, save {}%)",
                product.price,
                original,
                product.discount_percentage()
            ),
        ),
        _ => ctx.output.kv("price", &product.price.to_string()),
    }
    ctx.output.kv(
        "rating",
        &format!("{} ({} reviews)", stars(product.rating), product.reviews),
    );
    ctx.output.kv("stock", &stock_badge(product.in_stock));
    if in_cart {
        ctx.output.kv("cart", "Already in your cart");
    }
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }

    if !related.is_empty() {
        ctx.output.header("You might also like");
        for other in related {
            ctx.output
                .list_item(&format!("{} {} ({})", other.id, other.name, other.price));
        }
    }

    Ok(())
}
