//! Monotonic tickets for overlapping quote requests.
//!
//! Every trigger press takes a ticket before its fetch starts. When results come
//! back out of order only the one holding the latest ticket may be displayed.
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues request tickets and tells whether a ticket is still the latest.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Creates a sequencer; the first ticket is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued ticket, 0 if none.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// `true` if no newer ticket has been issued since `ticket`.
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest()
    }
}
