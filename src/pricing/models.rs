//! Pricing Domain Models
//!
//! Shipping methods, the shipping-rate table and the derived checkout summary.

use crate::error::{CheckoutError, ConfigError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// =============================================================================
// Shipping
// =============================================================================

/// Delivery options a rate table may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
    Post,
    Courier,
    Tipax,
}

impl ShippingMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Post => "post",
            ShippingMethod::Courier => "courier",
            ShippingMethod::Tipax => "tipax",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = CheckoutError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            "post" => Ok(ShippingMethod::Post),
            "courier" => Ok(ShippingMethod::Courier),
            "tipax" => Ok(ShippingMethod::Tipax),
            other => Err(CheckoutError::UnknownShippingMethod(other.to_string())),
        }
    }
}

/// One row of the shipping-rate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub method: ShippingMethod,
    /// Fixed cost in the smallest currency unit
    pub cost: u64,
}

/// Ordered, non-empty table of offered shipping methods and their costs.
///
/// The first entry is the default selection for a new checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ShippingRate>", into = "Vec<ShippingRate>")]
pub struct ShippingRates {
    rates: Vec<ShippingRate>,
}

impl ShippingRates {
    /// Builds a rate table, rejecting empty tables and repeated methods.
    pub fn new(rates: Vec<ShippingRate>) -> Result<Self, ConfigError> {
        if rates.is_empty() {
            return Err(ConfigError::InvalidCatalog(
                "shipping rate table must offer at least one method".to_string(),
            ));
        }

        for (i, rate) in rates.iter().enumerate() {
            if rates[..i].iter().any(|r| r.method == rate.method) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "shipping method {} listed more than once",
                    rate.method
                )));
            }
        }

        Ok(Self { rates })
    }

    /// Cost of `method`, or `None` if this table does not offer it.
    pub fn cost_of(&self, method: ShippingMethod) -> Option<u64> {
        self.rates
            .iter()
            .find(|r| r.method == method)
            .map(|r| r.cost)
    }

    pub fn offers(&self, method: ShippingMethod) -> bool {
        self.cost_of(method).is_some()
    }

    pub fn default_method(&self) -> ShippingMethod {
        // Non-empty by construction.
        self.rates[0].method
    }

    pub fn as_slice(&self) -> &[ShippingRate] {
        &self.rates
    }
}

impl Default for ShippingRates {
    /// Standard and express delivery at the prices the checkout screen has
    /// always shown.
    fn default() -> Self {
        Self {
            rates: vec![
                ShippingRate {
                    method: ShippingMethod::Standard,
                    cost: 20_000,
                },
                ShippingRate {
                    method: ShippingMethod::Express,
                    cost: 50_000,
                },
            ],
        }
    }
}

impl TryFrom<Vec<ShippingRate>> for ShippingRates {
    type Error = ConfigError;

    fn try_from(rates: Vec<ShippingRate>) -> Result<Self, Self::Error> {
        Self::new(rates)
    }
}

impl From<ShippingRates> for Vec<ShippingRate> {
    fn from(table: ShippingRates) -> Self {
        table.rates
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Monetary summary derived from the current checkout state.
///
/// All amounts are in the smallest currency unit. `total` always equals
/// `subtotal + shipping + tax - discount_value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub subtotal: u64,
    pub shipping: u64,
    pub tax: u64,
    pub discount_value: u64,
    pub total: u64,
}
