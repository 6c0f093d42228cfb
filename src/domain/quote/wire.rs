//! Wire types for quotes (REST + tickertape).

use crate::shared::{Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /venues/{venue}/stocks/{symbol}/quote`, also the `quote` object of a
/// tickertape message.
///
/// `bid`, `ask` and the last-trade fields are absent when there is nothing to report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub venue: Venue,
    pub symbol: Symbol,
    #[serde(default)]
    pub bid: Option<u64>,
    #[serde(default)]
    pub ask: Option<u64>,
    #[serde(default)]
    pub bid_size: u64,
    #[serde(default)]
    pub ask_size: u64,
    #[serde(default)]
    pub bid_depth: u64,
    #[serde(default)]
    pub ask_depth: u64,
    #[serde(default)]
    pub last: Option<u64>,
    #[serde(default)]
    pub last_size: Option<u64>,
    #[serde(default)]
    pub last_trade: Option<DateTime<Utc>>,
    pub quote_time: DateTime<Utc>,
}

/// Tickertape message: `{"ok": true, "quote": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerMessage {
    pub ok: bool,
    pub quote: QuoteResponse,
}
