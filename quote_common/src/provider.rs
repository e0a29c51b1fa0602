//! Quote retrieval with duplicate suppression and a local fallback.
//!
//! `QuoteProvider::request_quote` never fails. It asks the remote source for a quote,
//! asks again while the answer repeats the quote currently on screen (up to
//! `max_attempts` requests in total) and answers from the `FallbackPool` when the
//! remote side errors or keeps repeating itself.
use log::{debug, error, info, warn};
use rand::Rng;

use crate::fallback::FallbackPool;
use crate::quote::Quote;
use crate::source::QuoteSource;

/// Remote requests made for one `request_quote` call unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Where a returned quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Fetched from the remote source.
    Remote,
    /// Picked from the local pool.
    Fallback,
}

/// A quote together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// The quote to display.
    pub quote: Quote,
    /// Remote or fallback.
    pub origin: Origin,
    /// Remote requests issued, including the failed one if any.
    pub attempts: u32,
}

/// Produces quotes to display from a remote source with a local fallback.
#[derive(Debug)]
pub struct QuoteProvider<S> {
    source: S,
    fallback: FallbackPool,
    max_attempts: u32,
}

impl<S: QuoteSource> QuoteProvider<S> {
    /// Provider over `source` with the built-in fallback pool.
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback: FallbackPool::builtin(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replace the fallback pool.
    pub fn with_fallback(mut self, fallback: FallbackPool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Cap on remote requests per call; values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// The configured fallback pool.
    pub fn fallback(&self) -> &FallbackPool {
        &self.fallback
    }

    /// The configured attempt cap.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Next quote to show in place of the one whose text is `current_text`
    /// (empty when nothing is shown).
    pub fn request_quote(&self, current_text: &str) -> Quote {
        self.request_quote_detailed(current_text).quote
    }

    /// Like [`Self::request_quote`], also reporting origin and attempt count.
    pub fn request_quote_detailed(&self, current_text: &str) -> Fetched {
        self.request_quote_with(&mut rand::rng(), current_text)
    }

    /// Like [`Self::request_quote_detailed`] with a caller-supplied random source
    /// for the fallback pick.
    pub fn request_quote_with<R: Rng>(&self, rng: &mut R, current_text: &str) -> Fetched {
        for attempt in 1..=self.max_attempts {
            match self.source.fetch() {
                Ok(quote) if !quote.has_text(current_text) => {
                    debug!("Remote quote accepted after {} attempt(s)", attempt);
                    return Fetched {
                        quote,
                        origin: Origin::Remote,
                        attempts: attempt,
                    };
                }
                Ok(_) => {
                    debug!(
                        "Remote returned the displayed quote again (attempt {}/{})",
                        attempt, self.max_attempts
                    );
                }
                Err(e) => {
                    if e.is_remote_failure() {
                        warn!("Error fetching quote: {}", e);
                    } else {
                        error!("Quote source failed unexpectedly: {}", e);
                    }
                    return self.fallback_quote(rng, current_text, attempt);
                }
            }
        }

        info!(
            "Remote kept repeating the displayed quote for {} attempts; using fallback",
            self.max_attempts
        );
        self.fallback_quote(rng, current_text, self.max_attempts)
    }

    fn fallback_quote<R: Rng>(&self, rng: &mut R, current_text: &str, attempts: u32) -> Fetched {
        Fetched {
            quote: self.fallback.pick_with(rng, current_text),
            origin: Origin::Fallback,
            attempts,
        }
    }
}
