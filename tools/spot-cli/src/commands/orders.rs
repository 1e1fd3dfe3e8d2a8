//! Order history listing.

use anyhow::Result;
use spot_commerce::prelude::*;

use super::OrdersArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
pub fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let history = ctx.orders()?;

    let mut orders: Vec<&Order> = match &args.search {
        Some(term) => history.search(term),
        None => history.orders().iter().collect(),
    };
    if let Some(user_id) = args.user {
        let role = if args.admin { Role::Admin } else { Role::Customer };
        let viewer = User::new(user_id, "", "").with_role(role);
        let visible = history.visible_to(&viewer);
        orders.retain(|o| visible.iter().any(|v| v.id == o.id));
    }

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header(&format!("Orders ({})", orders.len()));
    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    let widths = [18, 10, 6, 12, 0];
    ctx.output
        .table_row(&["ORDER", "CUSTOMER", "ITEMS", "TOTAL", "STATUS"], &widths);
    for order in &orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                order.user_id.as_str(),
                &order.item_count().to_string(),
                &order.total().to_string(),
                &status_badge(order.status),
            ],
            &widths,
        );
    }

    let revenue: Vec<Money> = orders.iter().map(|o| o.total()).collect();
    let currency = ctx.pricing().currency;
    ctx.output.kv(
        "revenue",
        &Money::saturating_sum(revenue.iter(), currency).to_string(),
    );
    Ok(())
}
