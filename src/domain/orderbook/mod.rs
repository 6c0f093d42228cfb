//! Orderbook domain: resting bids and asks for one stock.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{format_cents, Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry in the book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: u64,
    pub quantity: u64,
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} @ {}", self.quantity, format_cents(self.price))
    }
}

/// Snapshot of a stock's orderbook.
///
/// Bids and asks are kept in the order the venue sent them (best first).
/// The venue may list several entries at the same price; see
/// [`OrderBook::aggregated_bids`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub venue: Venue,
    pub symbol: Symbol,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub timestamp: DateTime<Utc>,
}

impl OrderBook {
    /// Highest bid.
    pub fn best_bid(&self) -> Option<PriceLevel> {
        self.bids.iter().copied().max_by_key(|l| l.price)
    }

    /// Lowest ask.
    pub fn best_ask(&self) -> Option<PriceLevel> {
        self.asks.iter().copied().min_by_key(|l| l.price)
    }

    /// `best_ask - best_bid` in cents. Negative when the book is crossed.
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price as i64 - bid.price as i64),
            _ => None,
        }
    }

    /// Total shares bid.
    pub fn bid_depth(&self) -> u64 {
        self.bids.iter().map(|l| l.quantity).sum()
    }

    /// Total shares offered.
    pub fn ask_depth(&self) -> u64 {
        self.asks.iter().map(|l| l.quantity).sum()
    }

    /// Bids merged by price, best (highest) first.
    pub fn aggregated_bids(&self) -> Vec<PriceLevel> {
        aggregate(&self.bids).into_iter().rev().collect()
    }

    /// Asks merged by price, best (lowest) first.
    pub fn aggregated_asks(&self) -> Vec<PriceLevel> {
        aggregate(&self.asks)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

fn aggregate(levels: &[PriceLevel]) -> Vec<PriceLevel> {
    let mut merged: BTreeMap<u64, u64> = BTreeMap::new();
    for level in levels {
        *merged.entry(level.price).or_default() += level.quantity;
    }
    merged
        .into_iter()
        .map(|(price, quantity)| PriceLevel { price, quantity })
        .collect()
}
