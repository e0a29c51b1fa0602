//! Compiled-in quotes used whenever the remote source fails.
use rand::Rng;

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::result::Result;

const BUILTIN: [(&str, &str); 4] = [
    (
        "Innovation is the outcome of a habit, not a random act.",
        "Sukant Ratnakar",
    ),
    (
        "Technology is best when it brings people together.",
        "Matt Mullenweg",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Every great developer you know got there by solving problems they were unqualified to solve until they actually did it.",
        "Patrick McKenzie",
    ),
];

/// Ordered, non-empty list of local quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPool {
    quotes: Vec<Quote>,
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackPool {
    /// The four built-in quotes.
    pub fn builtin() -> Self {
        let quotes = BUILTIN
            .iter()
            .filter_map(|(text, author)| Quote::new(text, author).ok())
            .collect();
        Self { quotes }
    }

    /// A custom pool. Rejects an empty list.
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyFallbackPool);
        }
        Ok(Self { quotes })
    }

    /// All entries in order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// `true` if `quote` is one of the entries.
    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.contains(quote)
    }

    /// Pick uniformly among entries whose text differs from `exclude_text`.
    ///
    /// If every entry has that text the whole pool is used, so a pick always succeeds.
    pub fn pick_with<R: Rng>(&self, rng: &mut R, exclude_text: &str) -> Quote {
        let candidates: Vec<&Quote> = self
            .quotes
            .iter()
            .filter(|q| !q.has_text(exclude_text))
            .collect();

        if candidates.is_empty() {
            return self.quotes[rng.random_range(0..self.quotes.len())].clone();
        }
        candidates[rng.random_range(0..candidates.len())].clone()
    }
}
