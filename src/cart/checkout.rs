//! Checkout State Container
//!
//! Holds one shopper's mutable checkout state and funnels every change
//! through validation, recomputation and a single observer emission.

use super::{
    catalog::Catalog,
    helpers::clamp_quantity,
    models::{Address, AddressMode, CartItem, CheckoutSnapshot, GuestAddressInput, PaymentMethod},
    observer::SummaryObserver,
};
use crate::{
    error::CheckoutError,
    pricing::{compute_summary, CheckoutSummary, ShippingMethod},
};
use std::{collections::HashMap, sync::Arc};

/// Mutable state behind a checkout screen.
///
/// Every mutating method that returns `Ok` has recomputed the summary and
/// handed it to the observer exactly once. A method that returns `Err` has
/// changed nothing and emitted nothing.
pub struct CheckoutState<O> {
    catalog: Arc<Catalog>,
    /// Display order
    items: Vec<CartItem>,
    /// Item id -> position in `items`
    index: HashMap<String, usize>,
    address_mode: AddressMode,
    address: Address,
    shipping_method: ShippingMethod,
    payment_method: PaymentMethod,
    discount_code: String,
    observer: O,
}

impl<O: SummaryObserver> CheckoutState<O> {
    /// Starts a checkout seeded with the catalog's items, in guest address
    /// mode, with the rate table's first shipping method selected.
    pub fn new(catalog: Arc<Catalog>, observer: O) -> Self {
        let items: Vec<CartItem> = catalog
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                item.quantity = item.quantity.max(1);
                item
            })
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id.clone(), pos))
            .collect();
        let shipping_method = catalog.shipping_rates.default_method();

        Self {
            catalog,
            items,
            index,
            address_mode: AddressMode::Guest,
            address: Address::default(),
            shipping_method,
            payment_method: PaymentMethod::default(),
            discount_code: String::new(),
            observer,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&CartItem> {
        self.index.get(item_id).map(|&pos| &self.items[pos])
    }

    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn discount_code(&self) -> &str {
        &self.discount_code
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Derives the summary for the current state without emitting it.
    pub fn summary(&self) -> Result<CheckoutSummary, CheckoutError> {
        compute_summary(
            &self.items,
            &self.catalog.shipping_rates,
            self.shipping_method,
            &self.discount_code,
        )
    }

    pub fn snapshot(&self) -> Result<CheckoutSnapshot, CheckoutError> {
        Ok(CheckoutSnapshot {
            items: self.items.clone(),
            address_mode: self.address_mode,
            address: self.address.clone(),
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            discount_code: self.discount_code.clone(),
            summary: self.summary()?,
        })
    }

    /// Emits the current summary without changing anything.
    pub fn publish(&mut self) -> Result<CheckoutSummary, CheckoutError> {
        let summary = self.summary()?;
        self.observer.on_summary(&summary);
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Sets a line's quantity, clamped to at least 1. Unknown ids are ignored.
    pub fn set_quantity(
        &mut self,
        item_id: &str,
        quantity: i64,
    ) -> Result<CheckoutSummary, CheckoutError> {
        match self.index.get(item_id) {
            Some(&pos) => {
                let quantity = clamp_quantity(quantity);
                self.items[pos].quantity = quantity;
                tracing::debug!(item_id, quantity, "quantity set");
            }
            None => tracing::debug!(item_id, "ignoring quantity change for unknown item"),
        }
        self.publish()
    }

    /// Moves a line's quantity by `delta`, never below 1. Unknown ids are
    /// ignored.
    pub fn adjust_quantity(
        &mut self,
        item_id: &str,
        delta: i64,
    ) -> Result<CheckoutSummary, CheckoutError> {
        match self.index.get(item_id) {
            Some(&pos) => {
                let current = i64::from(self.items[pos].quantity);
                let quantity = clamp_quantity(current.saturating_add(delta));
                self.items[pos].quantity = quantity;
                tracing::debug!(item_id, delta, quantity, "quantity adjusted");
            }
            None => tracing::debug!(item_id, "ignoring quantity change for unknown item"),
        }
        self.publish()
    }

    /// Selects a shipping method offered by the catalog's rate table.
    pub fn set_shipping_method(
        &mut self,
        method: ShippingMethod,
    ) -> Result<CheckoutSummary, CheckoutError> {
        if !self.catalog.shipping_rates.offers(method) {
            return Err(CheckoutError::UnknownShippingMethod(method.to_string()));
        }
        self.shipping_method = method;
        tracing::debug!(%method, "shipping method selected");
        self.publish()
    }

    pub fn set_payment_method(
        &mut self,
        method: PaymentMethod,
    ) -> Result<CheckoutSummary, CheckoutError> {
        self.payment_method = method;
        tracing::debug!(?method, "payment method selected");
        self.publish()
    }

    /// Stores the discount code as typed; whether it grants anything is
    /// decided when the summary is computed.
    pub fn set_discount_code(
        &mut self,
        code: impl Into<String>,
    ) -> Result<CheckoutSummary, CheckoutError> {
        self.discount_code = code.into();
        tracing::debug!(code = %self.discount_code, "discount code entered");
        self.publish()
    }

    /// Switches between guest entry and saved-address selection.
    ///
    /// An actual switch resets the address to the empty record. Asking for the
    /// mode that is already active keeps the current address.
    pub fn set_address_mode(&mut self, guest: bool) -> Result<CheckoutSummary, CheckoutError> {
        let mode = if guest {
            AddressMode::Guest
        } else {
            AddressMode::Saved
        };

        if mode != self.address_mode {
            self.address_mode = mode;
            self.address = Address::default();
            tracing::debug!(?mode, "address mode switched, address cleared");
        }
        self.publish()
    }

    /// Copies a saved address into the checkout, switching to saved mode.
    pub fn select_saved_address(
        &mut self,
        address_id: &str,
    ) -> Result<CheckoutSummary, CheckoutError> {
        let record = self
            .catalog
            .find_saved_address(address_id)
            .cloned()
            .ok_or_else(|| CheckoutError::UnknownAddress(address_id.to_string()))?;

        self.address_mode = AddressMode::Saved;
        self.address = record;
        tracing::debug!(address_id, "saved address selected");
        self.publish()
    }

    /// Replaces the freeform address fields. Ignored outside guest mode.
    pub fn set_guest_address(
        &mut self,
        input: GuestAddressInput,
    ) -> Result<CheckoutSummary, CheckoutError> {
        if self.address_mode == AddressMode::Guest {
            self.address = Address {
                id: String::new(),
                full_name: input.full_name,
                phone: input.phone,
                address_text: input.address_text,
            };
        } else {
            tracing::debug!("ignoring guest address entry while a saved address is in use");
        }
        self.publish()
    }
}
