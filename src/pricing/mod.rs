//! Pricing Engine
//!
//! Pure derivation of the checkout summary from cart contents, the selected
//! shipping method and the entered discount code. Nothing in here performs
//! I/O or holds state.

pub mod engine;
pub mod helpers;
pub mod models;

pub use engine::compute_summary;
pub use models::{CheckoutSummary, ShippingMethod, ShippingRate, ShippingRates};
