//! Checkout Business Logic Helpers
//!
//! This module contains helper functions for quantity handling, session
//! identifiers and log formatting.

use super::models::CartItem;
use uuid::Uuid;

/// Clamps a requested quantity into the valid range `1..=u32::MAX`.
pub fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}

/// Returns the provided session id or creates a new UUID string when `None`.
///
/// This guarantees that every checkout session works with a non-empty identifier.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"1x Headphones, 2x Cable"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_quantity_enforces_minimum_of_one() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-5), 1);
        assert_eq!(clamp_quantity(i64::MIN), 1);
        assert_eq!(clamp_quantity(3), 3);
        assert_eq!(clamp_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn session_id_is_generated_when_missing_or_empty() {
        assert_eq!(get_or_create_session_id(Some("abc".into())), "abc");
        assert_eq!(get_or_create_session_id(None).len(), 32);
        assert_eq!(get_or_create_session_id(Some(String::new())).len(), 32);
    }

    #[test]
    fn item_summary_lists_quantities_and_titles() {
        let items = crate::cart::catalog::Catalog::demo().items;
        assert_eq!(
            format_item_summary(&items),
            "1x Awei A897BL Bluetooth Headphones, 2x Type-C Charging Cable"
        );
        assert_eq!(format_item_summary(&[]), "");
    }
}
