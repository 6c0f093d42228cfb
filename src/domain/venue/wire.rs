//! Wire types for venue health and listing responses.

use crate::shared::{serde_util, Symbol, Venue};
use serde::{Deserialize, Serialize};

/// `GET /heartbeat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeartbeatResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: String,
}

/// `GET /venues/{venue}/heartbeat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VenueHeartbeatResponse {
    pub ok: bool,
    pub venue: Venue,
}

/// `GET /venues/{venue}/stocks`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StocksResponse {
    pub ok: bool,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub symbols: Vec<StockEntry>,
}

/// One listed stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockEntry {
    pub name: String,
    pub symbol: Symbol,
}
