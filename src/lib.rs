//! CheckPay Cart Library
//!
//! This library derives the payment summary of a checkout cart (subtotal,
//! shipping, tax, discount, total) and keeps it consistent while the shopper
//! edits quantities, shipping, discount code and delivery address. A small
//! HTTP adapter exposes checkout sessions to a front end.

// Domain modules
pub mod cart;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
