//! Checkout Domain Module
//!
//! This module contains the checkout screen's state and its HTTP surface:
//! - Domain models (CartItem, Address, payment choice, inputs, responses)
//! - Reference catalog (seed items, saved addresses, shipping rates)
//! - The checkout state container and its summary observers
//! - Session management and REST/SSE handlers

pub mod catalog;
pub mod checkout;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod observer;
pub mod state;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use checkout::CheckoutState;
pub use handlers::routes;
pub use observer::{SummaryChannel, SummaryLog, SummaryObserver};
pub use state::{AppState, SharedState};
