//! Remote quote sources.
//!
//! `QuoteSource` is the seam between `QuoteProvider` and the transport: one call,
//! one quote or one error. `HttpQuoteSource` is the production implementation
//! backed by a blocking `reqwest` client; tests plug in scripted sources.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::net::{Endpoint, NO_CACHE};
use crate::quote::{Quote, parse_remote};
use crate::result::Result;

/// Something that can produce a single random quote.
pub trait QuoteSource {
    /// Fetch one quote.
    ///
    /// Fails with `QuoteError::Network` when the request does not complete and with
    /// `QuoteError::Parse` when the response cannot be decoded.
    fn fetch(&self) -> Result<Quote>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn fetch(&self) -> Result<Quote> {
        (**self).fetch()
    }
}

impl<S: QuoteSource + ?Sized> QuoteSource for Box<S> {
    fn fetch(&self) -> Result<Quote> {
        (**self).fetch()
    }
}

/// Fetches quotes over HTTP with caching disabled.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    endpoint: Endpoint,
}

impl HttpQuoteSource {
    /// Build a source for `endpoint` whose requests give up after `timeout`.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// The endpoint this source queries.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Quote> {
        let query = self.endpoint.query();
        debug!("GET {} {:?}", self.endpoint.base_url, query);

        let response = self
            .client
            .get(&self.endpoint.base_url)
            .query(&query[..])
            .header(CACHE_CONTROL, NO_CACHE)
            .header(PRAGMA, NO_CACHE)
            .send()?
            .error_for_status()?;
        let body = response.bytes()?;

        parse_remote(&body)
    }
}
