//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spot_commerce::cart::PricingConfig;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["spot.toml", ".spot.toml", "spot.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotConfig {
    /// Where the cart and order slots live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product seed data.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl SpotConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per slot. Relative paths resolve
    /// against the config file's directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".spot".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of products loaded at startup.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Generate a default spot.toml config file.
pub fn generate_default_config() -> String {
    r#"# Spot storefront configuration

[storage]
dir = ".spot"

[catalog]
path = "data/catalog.json"

[pricing]
currency = "USD"
free_shipping_threshold_cents = 5000
flat_shipping_cents = 999
tax_rate_percent = 8.0
"#
    .to_string()
}
