//! Quote state container: app-owned, SDK-provided update logic.

use super::Quote;
use crate::shared::{Symbol, Venue};
use std::collections::HashMap;

/// Latest quote per (venue, symbol), typically fed from the tickertape.
///
/// Quotes arriving with an older `quote_time` than the stored one are ignored.
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    quotes: HashMap<(Venue, Symbol), Quote>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a quote. Returns `false` if it was older than the one already held.
    pub fn update(&mut self, quote: Quote) -> bool {
        let key = (quote.venue.clone(), quote.symbol.clone());
        match self.quotes.get(&key) {
            Some(existing) if existing.quote_time > quote.quote_time => {
                tracing::trace!(
                    venue = %quote.venue,
                    symbol = %quote.symbol,
                    "Ignoring stale quote"
                );
                false
            }
            _ => {
                self.quotes.insert(key, quote);
                true
            }
        }
    }

    pub fn get(&self, venue: &Venue, symbol: &Symbol) -> Option<&Quote> {
        self.quotes.get(&(venue.clone(), symbol.clone()))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn clear(&mut self) {
        self.quotes.clear();
    }
}
