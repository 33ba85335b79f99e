//! Checkout Domain Models
//!
//! This module contains the data structures the checkout screen edits:
//! cart lines, delivery addresses, payment choice, plus the request and
//! response shapes of the HTTP adapter.

use crate::pricing::{CheckoutSummary, ShippingMethod};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// One purchasable line in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable, unique identifier
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,

    /// Price of a single unit in the smallest currency unit
    pub unit_price: u64,

    /// Discount taken off the line once, regardless of quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_discount: Option<u64>,

    /// Quantity of this item (defaults to 1, never below 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Image reference for display
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub delivery_tags: Vec<String>,
}

/// A delivery address.
///
/// An empty `id` marks an address typed in by a guest rather than one copied
/// from the saved-address catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub address_text: String,
}

impl Address {
    pub fn is_guest_entered(&self) -> bool {
        self.id.is_empty()
    }
}

/// How the active address is acquired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressMode {
    /// Freeform entry
    #[default]
    Guest,
    /// Chosen from the saved-address catalog
    Saved,
}

/// Payment option; carried for display and submission only, never priced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Internet payment gateway
    #[default]
    Online,
    /// Pay the courier on delivery
    CashOnDelivery,
}

/// Point-in-time view of a checkout session, summary included
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSnapshot {
    pub items: Vec<CartItem>,
    pub address_mode: AddressMode,
    pub address: Address,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub discount_code: String,
    pub summary: CheckoutSummary,
}

// =============================================================================
// HTTP Inputs
// =============================================================================

/// Input for opening a checkout session
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessionInput {
    /// Optional session identifier; one is generated when absent
    pub session_id: Option<String>,
}

/// Input for setting a line's quantity outright
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetQuantityInput {
    pub item_id: String,
    /// Values below 1 are clamped to 1
    pub quantity: i64,
}

/// Input for the +/- quantity controls
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustQuantityInput {
    pub item_id: String,
    pub delta: i64,
}

/// Input for choosing a shipping method by its wire name
#[derive(Debug, Deserialize)]
pub struct ShippingInput {
    pub method: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentInput {
    pub method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct DiscountInput {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct AddressModeInput {
    pub guest: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddressInput {
    pub address_id: String,
}

/// Freeform address fields typed by a guest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestAddressInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address_text: String,
}

// =============================================================================
// HTTP Responses
// =============================================================================

/// Response for session-level operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Status of the operation
    pub status: String,

    pub session_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<CheckoutSnapshot>,
}
