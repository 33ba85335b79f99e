//! Summary observers
//!
//! The checkout state pushes every recomputed summary to exactly one
//! observer. Any `FnMut(&CheckoutSummary)` closure qualifies; the HTTP
//! adapter uses [`SummaryChannel`] so that many subscribers can follow a
//! session.

use crate::pricing::CheckoutSummary;
use tokio::sync::watch;

/// Receives the summary after every successful checkout mutation.
pub trait SummaryObserver {
    fn on_summary(&mut self, summary: &CheckoutSummary);
}

impl<F> SummaryObserver for F
where
    F: FnMut(&CheckoutSummary),
{
    fn on_summary(&mut self, summary: &CheckoutSummary) {
        self(summary);
    }
}

/// Observer that keeps every emitted summary in order.
#[derive(Debug, Default)]
pub struct SummaryLog {
    emitted: Vec<CheckoutSummary>,
}

impl SummaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> &[CheckoutSummary] {
        &self.emitted
    }

    pub fn last(&self) -> Option<&CheckoutSummary> {
        self.emitted.last()
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}

impl SummaryObserver for SummaryLog {
    fn on_summary(&mut self, summary: &CheckoutSummary) {
        self.emitted.push(*summary);
    }
}

/// Observer that republishes summaries on a `tokio::sync::watch` channel.
///
/// Subscribers always see the latest summary; every emission wakes them,
/// even when the value is unchanged.
#[derive(Debug)]
pub struct SummaryChannel {
    tx: watch::Sender<CheckoutSummary>,
}

impl Default for SummaryChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryChannel {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CheckoutSummary::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<CheckoutSummary> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> CheckoutSummary {
        *self.tx.borrow()
    }
}

impl SummaryObserver for SummaryChannel {
    fn on_summary(&mut self, summary: &CheckoutSummary) {
        self.tx.send_replace(*summary);
    }
}
