//! Cart pricing calculations.
//!
//! Shipping and tax are not cart state. They are derived from the subtotal
//! with fixed rules so the cart summary and checkout agree to the cent.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping and tax rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency the amounts below are in.
    pub currency: Currency,
    /// Subtotal at or above which shipping is free, in cents.
    pub free_shipping_threshold_cents: i64,
    /// Flat shipping fee below the threshold, in cents.
    pub flat_shipping_cents: i64,
    /// Tax rate as a percentage of the subtotal.
    pub tax_rate_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            free_shipping_threshold_cents: 5000,
            flat_shipping_cents: 999,
            tax_rate_percent: 8.0,
        }
    }
}

impl PricingConfig {
    pub fn free_shipping_threshold(&self) -> Money {
        Money::new(self.free_shipping_threshold_cents, self.currency)
    }

    pub fn flat_shipping(&self) -> Money {
        Money::new(self.flat_shipping_cents, self.currency)
    }

    /// Shipping owed on `subtotal`.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents >= self.free_shipping_threshold_cents {
            Money::zero(subtotal.currency)
        } else {
            Money::new(self.flat_shipping_cents, subtotal.currency)
        }
    }

    /// Tax owed on `subtotal`, rounded once to the cent.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.tax_rate_percent)
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub grand_total: Money,
    /// Threshold used for the free-shipping decision.
    pub free_shipping_threshold: Money,
}

impl CartPricing {
    /// Derive shipping, tax and total from a subtotal.
    pub fn calculate(subtotal: Money, config: &PricingConfig) -> Self {
        let shipping = config.shipping_for(subtotal);
        let tax = config.tax_for(subtotal);
        Self {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
            free_shipping_threshold: Money::new(
                config.free_shipping_threshold_cents,
                subtotal.currency,
            ),
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more to spend for free shipping, `None` once it applies.
    pub fn amount_until_free_shipping(&self) -> Option<Money> {
        if self.is_free_shipping() {
            return None;
        }
        self.free_shipping_threshold.try_subtract(&self.subtotal)
    }
}
