//!
//! Core of the "Debug Your Mind" quote widget.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the immutable `Quote` value and remote payload decoding.
//! - `tags` — topical tags for the remote query and tag-file parsing.
//! - `net` — remote endpoint description and cache-busting query.
//! - `source` — the `QuoteSource` seam and its HTTP implementation.
//! - `fallback` — compiled-in quotes used when the remote side fails.
//! - `provider` — `QuoteProvider`, fetch with duplicate suppression and fallback.
//! - `sequence` — request tickets that let late results be discarded.
//! - `pointer` — screen geometry and the document-level pointer event bus.
//! - `display` — show/hide state of the quote box with outside-click dismissal.
#![warn(missing_docs)]
pub mod display;
pub mod error;
pub mod fallback;
pub mod net;
pub mod pointer;
pub mod provider;
pub mod quote;
pub mod result;
pub mod sequence;
pub mod source;
pub mod tags;

pub use display::{Layout, QuoteDisplay, Visibility};
pub use error::QuoteError;
pub use fallback::FallbackPool;
pub use provider::{Fetched, Origin, QuoteProvider};
pub use quote::Quote;
pub use result::Result;
pub use source::{HttpQuoteSource, QuoteSource};
