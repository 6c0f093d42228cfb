//! Wire types for the orderbook endpoint.

use crate::shared::{serde_util, Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /venues/{venue}/stocks/{symbol}`
///
/// An empty side arrives as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookResponse {
    pub venue: Venue,
    pub symbol: Symbol,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub bids: Vec<RestBookLevel>,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub asks: Vec<RestBookLevel>,
    pub ts: DateTime<Utc>,
}

/// A single resting entry in the book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestBookLevel {
    pub price: u64,
    pub qty: u64,
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
}
