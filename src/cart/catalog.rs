//! Reference data for checkout sessions: seed cart lines, the saved-address
//! catalog and the shipping-rate table.

use super::models::{Address, CartItem};
use crate::{error::ConfigError, pricing::ShippingRates};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// Read-only reference data shared by every checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Lines every new session starts with
    pub items: Vec<CartItem>,

    #[serde(default)]
    pub saved_addresses: Vec<Address>,

    #[serde(default)]
    pub shipping_rates: ShippingRates,
}

impl Catalog {
    /// Loads and validates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid JSON
    /// for this shape, or breaks a catalog invariant.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw, &path.display().to_string())
    }

    /// Parses and validates a catalog from JSON text. `origin` names the
    /// source in error messages.
    pub fn from_json(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog =
            serde_json::from_str(raw).map_err(|source| ConfigError::CatalogParse {
                path: origin.to_string(),
                source,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the invariants the checkout state relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut item_ids = HashSet::new();
        for item in &self.items {
            if item.id.is_empty() {
                return Err(invalid(format!("item \"{}\" has an empty id", item.title)));
            }
            if !item_ids.insert(item.id.as_str()) {
                return Err(invalid(format!("duplicate item id {}", item.id)));
            }
            if item.quantity < 1 {
                return Err(invalid(format!("item {} has quantity 0", item.id)));
            }
            if item.unit_discount.unwrap_or(0) > item.unit_price {
                return Err(invalid(format!(
                    "item {} discount exceeds its unit price",
                    item.id
                )));
            }
        }

        let mut address_ids = HashSet::new();
        for address in &self.saved_addresses {
            if address.id.is_empty() {
                return Err(invalid(format!(
                    "saved address for {} has an empty id",
                    address.full_name
                )));
            }
            if !address_ids.insert(address.id.as_str()) {
                return Err(invalid(format!("duplicate saved address id {}", address.id)));
            }
        }

        Ok(())
    }

    pub fn find_saved_address(&self, address_id: &str) -> Option<&Address> {
        self.saved_addresses.iter().find(|a| a.id == address_id)
    }

    /// Demonstration catalog used when no catalog file is configured.
    pub fn demo() -> Self {
        Self {
            items: vec![
                CartItem {
                    id: "1".to_string(),
                    title: "Awei A897BL Bluetooth Headphones".to_string(),
                    color: Some("Black".to_string()),
                    seller: Some("Dolphin Tech".to_string()),
                    unit_price: 1_625_000,
                    unit_discount: Some(132_500),
                    quantity: 1,
                    image: "/images/headphone.jpg".to_string(),
                    delivery_tags: vec![
                        "Marketplace delivery".to_string(),
                        "Fast delivery (Tehran)".to_string(),
                    ],
                },
                CartItem {
                    id: "2".to_string(),
                    title: "Type-C Charging Cable".to_string(),
                    color: Some("White".to_string()),
                    seller: Some("Cable Shop".to_string()),
                    unit_price: 125_000,
                    unit_discount: None,
                    quantity: 2,
                    image: "/images/cable.jpg".to_string(),
                    delivery_tags: vec!["Standard delivery".to_string()],
                },
            ],
            saved_addresses: vec![
                Address {
                    id: "home".to_string(),
                    full_name: "Sara Ahmadi".to_string(),
                    phone: "09120000001".to_string(),
                    address_text: "Tehran, Valiasr St., No. 12".to_string(),
                },
                Address {
                    id: "work".to_string(),
                    full_name: "Sara Ahmadi".to_string(),
                    phone: "09120000002".to_string(),
                    address_text: "Tehran, Azadi Sq., Tower B, Floor 4".to_string(),
                },
            ],
            shipping_rates: ShippingRates::default(),
        }
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::InvalidCatalog(reason)
}
