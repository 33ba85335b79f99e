//! Checkout Session Management
//!
//! This module manages the in-memory checkout sessions served over HTTP,
//! together with the reference catalog they are seeded from.

use super::{
    catalog::Catalog, checkout::CheckoutState, helpers::format_item_summary,
    models::CheckoutSnapshot, observer::SummaryChannel,
};
use crate::error::CheckoutError;
use dashmap::DashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A checkout session whose summaries are republished on a watch channel
pub type Session = CheckoutState<SummaryChannel>;

/// Core application state containing live sessions and reference data
pub struct AppState {
    /// Live checkout sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, Session>,

    /// Reference data every session is seeded from.
    pub catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::demo())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog: Arc::new(catalog),
        }
    }

    /// Opens the session `session_id` from the catalog, replacing any session
    /// already registered under that id, and publishes its initial summary.
    pub fn open_session(&self, session_id: &str) -> Result<CheckoutSnapshot, CheckoutError> {
        let mut session = CheckoutState::new(Arc::clone(&self.catalog), SummaryChannel::new());
        session.publish()?;
        let snapshot = session.snapshot()?;

        tracing::info!(
            session_id,
            items = %format_item_summary(session.items()),
            total = snapshot.summary.total,
            "checkout session opened"
        );

        if self.sessions.insert(session_id.to_string(), session).is_some() {
            tracing::info!(session_id, "previous session under this id was replaced");
        }
        Ok(snapshot)
    }

    /// Removes a session, returning whether it existed.
    pub fn close_session(&self, session_id: &str) -> bool {
        match self.sessions.remove(session_id) {
            Some((_, session)) => {
                tracing::info!(
                    session_id,
                    items = %format_item_summary(session.items()),
                    "checkout session closed"
                );
                true
            }
            None => false,
        }
    }
}
