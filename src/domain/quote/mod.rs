//! Quote domain: top of book and last trade for one stock.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::QuoteBoard;

use crate::shared::{Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A venue quote. Prices in cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub venue: Venue,
    pub symbol: Symbol,
    pub bid: Option<u64>,
    pub ask: Option<u64>,
    /// Shares at the best bid.
    pub bid_size: u64,
    /// Shares at the best ask.
    pub ask_size: u64,
    /// Shares bid across all prices.
    pub bid_depth: u64,
    /// Shares offered across all prices.
    pub ask_depth: u64,
    pub last: Option<u64>,
    pub last_size: Option<u64>,
    pub last_trade: Option<DateTime<Utc>>,
    pub quote_time: DateTime<Utc>,
}

impl Quote {
    /// `ask - bid` in cents, when both sides are quoted.
    pub fn spread(&self) -> Option<i64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask as i64 - bid as i64),
            _ => None,
        }
    }

    /// Midpoint in cents (rounded down), when both sides are quoted.
    pub fn mid(&self) -> Option<u64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(bid / 2 + ask / 2 + (bid % 2 + ask % 2) / 2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(bid: Option<u64>, ask: Option<u64>) -> Quote {
        Quote {
            venue: Venue::from("TESTEX"),
            symbol: Symbol::from("FOOBAR"),
            bid,
            ask,
            bid_size: 0,
            ask_size: 0,
            bid_depth: 0,
            ask_depth: 0,
            last: None,
            last_size: None,
            last_trade: None,
            quote_time: Utc::now(),
        }
    }

    #[test]
    fn test_spread_and_mid() {
        let q = quote(Some(5100), Some(5125));
        assert_eq!(q.spread(), Some(25));
        assert_eq!(q.mid(), Some(5112));
        assert_eq!(quote(Some(3), Some(5)).mid(), Some(4));
        assert_eq!(quote(Some(u64::MAX), Some(u64::MAX)).mid(), Some(u64::MAX));
    }

    #[test]
    fn test_one_sided_quote() {
        let q = quote(Some(5100), None);
        assert_eq!(q.spread(), None);
        assert_eq!(q.mid(), None);
    }
}
