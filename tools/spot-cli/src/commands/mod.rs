//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod orders;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text to match against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slugs to include (comma separated).
    #[arg(short, long, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Only show products that are in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Only show featured products.
    #[arg(long)]
    pub featured: bool,

    /// Sort order: featured, price-asc, price-desc, rating, newest.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,

    /// Number of related products to show.
    #[arg(long, default_value = "4")]
    pub related: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals.
    Show,
    /// Add a product, merging with an existing line.
    Add {
        /// Product ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product's line.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set a line's quantity. Zero or less removes it.
    Update {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Signed-in user ID.
    #[arg(long)]
    pub user: String,

    /// Customer name, also used on the shipping address.
    #[arg(long)]
    pub name: String,

    /// Customer email.
    #[arg(long)]
    pub email: String,

    /// Sign in with the admin role.
    #[arg(long)]
    pub admin: bool,

    #[arg(long)]
    pub street: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub zip: String,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Only show orders visible to this user.
    #[arg(long)]
    pub user: Option<String>,

    /// Treat the user as an admin (sees every order).
    #[arg(long, requires = "user")]
    pub admin: bool,

    /// Match order ID or status.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file in use.
    Path,
}
