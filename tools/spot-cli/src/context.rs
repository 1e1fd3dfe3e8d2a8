//! CLI execution context.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use spot_cache::{Cache, FileStore};
use spot_commerce::prelude::*;

use crate::config::{SpotConfig, CONFIG_NAMES};
use crate::output::Output;

/// Storage key for the placed-order list.
pub const ORDERS_STORAGE_KEY: &str = "spot-ecommerce-orders";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: SpotConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one up the
    /// directory tree. Without either, defaults apply.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (SpotConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (SpotConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative config paths resolve against.
    pub fn root(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a configured path.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.root().join(path)
        }
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.dir)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve_path(&self.config.catalog.path)
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.config.pricing
    }

    /// Open the file-backed store.
    pub fn store(&self) -> Result<FileStore> {
        let dir = self.storage_dir();
        FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage directory: {}", dir.display()))
    }

    /// Restore the persisted cart.
    pub fn cart(&self) -> Result<CartEngine<FileStore>> {
        Ok(CartEngine::load(self.store()?))
    }

    /// Load the catalog snapshot.
    pub fn catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        parse_catalog(&content, self.pricing().currency)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }

    /// Placed orders. An unreadable slot reads as no orders.
    pub fn orders(&self) -> Result<OrderHistory> {
        let cache = Cache::new(self.store()?);
        match cache.get::<OrderHistory>(ORDERS_STORAGE_KEY) {
            Ok(history) => Ok(history.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable order history");
                Ok(OrderHistory::new())
            }
        }
    }

    pub fn save_orders(&self, history: &OrderHistory) -> Result<()> {
        Cache::new(self.store()?)
            .set(ORDERS_STORAGE_KEY, history)
            .context("Failed to save order history")
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<(SpotConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match SpotConfig::load(&config_path) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => tracing::warn!(error = %format!("{:#}", e), "skipping config file"),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Parse a JSON array of products, skipping entries that do not parse,
/// fail validation, are priced in another currency than `currency` or
/// repeat an earlier ID.
pub fn parse_catalog(json: &str, currency: Currency) -> Result<Catalog> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let product: Product = match serde_json::from_value(entry) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog entry");
                continue;
            }
        };
        if let Err(e) = product.validate() {
            tracing::warn!(index, error = %e, "skipping invalid product");
            continue;
        }
        if product.price.currency != currency {
            tracing::warn!(
                index,
                id = %product.id,
                currency = %product.price.currency,
                expected = %currency,
                "skipping product in another currency"
            );
            continue;
        }
        if !seen.insert(product.id.clone()) {
            tracing::warn!(index, id = %product.id, "skipping duplicate product id");
            continue;
        }
        products.push(product);
    }

    tracing::debug!(count = products.len(), "catalog loaded");
    Ok(Catalog::new(products))
}
