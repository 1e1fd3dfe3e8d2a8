//! Catalog browsing.

use anyhow::Result;
use spot_commerce::prelude::*;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{stars, stock_badge, truncate};

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    ctx.output.debug(&format!(
        "Loaded {} products from {}",
        catalog.len(),
        ctx.catalog_path().display()
    ));

    let sort = SortKey::parse(&args.sort);
    if sort.as_str() != args.sort {
        ctx.output
            .warn(&format!("Unknown sort '{}', using {}", args.sort, sort.display_name()));
    }

    let spec = QuerySpec::new()
        .with_search(args.search.unwrap_or_default())
        .with_categories(&args.category)
        .in_stock_only(args.in_stock)
        .featured_only(args.featured)
        .with_sort(sort);

    let results = catalog.search(&spec);

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    ctx.output.header(&results.summary());
    if results.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    let widths = [6, 28, 12, 14, 12, 0];
    ctx.output.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "RATING", "STOCK"],
        &widths,
    );
    for product in results.iter() {
        let name = if product.featured {
            truncate(&format!("{} *", product.name), 28)
        } else {
            truncate(&product.name, 28)
        };
        let price = if product.is_on_sale() {
            format!("{} -{}%", product.price, product.discount_percentage())
        } else {
            product.price.to_string()
        };
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                product.category.display_name(),
                &price,
                &stars(product.rating),
                &stock_badge(product.in_stock),
            ],
            &widths,
        );
    }

    if spec.active_filter_count() > 0 {
        ctx.output
            .info(&format!("{} filter(s) active", spec.active_filter_count()));
    }

    Ok(())
}
