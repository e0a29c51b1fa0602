//! Background quote fetching.
//!
//! Each request runs `QuoteProvider::request_quote_detailed` on its own thread so the
//! event loop keeps reading input while the network is slow. Results come back
//! on a channel tagged with the ticket taken when the request started.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, info};
use quote_common::provider::{Fetched, QuoteProvider};
use quote_common::sequence::RequestSequencer;
use quote_common::source::QuoteSource;

/// Result of one background request.
#[derive(Debug, Clone)]
pub struct FetchDone {
    /// Ticket issued when the request started.
    pub ticket: u64,
    /// What the provider returned.
    pub fetched: Fetched,
}

/// Spawns one thread per quote request.
pub struct FetchWorker<S> {
    provider: Arc<QuoteProvider<S>>,
    sequencer: RequestSequencer,
    tx: Sender<FetchDone>,
}

impl<S> FetchWorker<S>
where
    S: QuoteSource + Send + Sync + 'static,
{
    /// Worker reporting finished requests on `tx`.
    pub fn new(provider: Arc<QuoteProvider<S>>, tx: Sender<FetchDone>) -> Self {
        Self {
            provider,
            sequencer: RequestSequencer::new(),
            tx,
        }
    }

    /// Start a request for a quote other than `current_text`; returns its ticket.
    pub fn request(&self, current_text: &str) -> u64 {
        let ticket = self.sequencer.issue();
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let current_text = current_text.to_string();

        info!("Fetching quote (request #{})", ticket);
        thread::spawn(move || {
            let fetched = provider.request_quote_detailed(&current_text);
            if tx.send(FetchDone { ticket, fetched }).is_err() {
                debug!("Request #{} finished after the client stopped", ticket);
            }
        });
        ticket
    }

    /// `true` if no request was started after `ticket`.
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.sequencer.is_latest(ticket)
    }
}
