//! Wire types for order requests, order snapshots and execution messages.

use super::OrderType;
use crate::shared::{serde_util, Account, Direction, OrderId, Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body of `POST /venues/{venue}/stocks/{symbol}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    pub account: Account,
    pub venue: Venue,
    pub symbol: Symbol,
    pub price: u64,
    #[serde(rename = "qty")]
    pub quantity: u64,
    pub direction: Direction,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// A single execution against an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FillResponse {
    pub price: u64,
    pub qty: u64,
    pub ts: DateTime<Utc>,
}

/// Order snapshot returned by placement, cancellation and status calls.
///
/// `qty` is the quantity still outstanding; `originalQty` the quantity asked
/// for. Some venue builds spell the latter `orignialQty`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub account: Account,
    pub venue: Venue,
    pub symbol: Symbol,
    pub price: u64,
    #[serde(default, alias = "orignialQty")]
    pub original_qty: u64,
    pub qty: u64,
    pub direction: Direction,
    pub order_type: OrderType,
    pub id: OrderId,
    pub ts: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub fills: Vec<FillResponse>,
    #[serde(default)]
    pub total_filled: u64,
    pub open: bool,
}

/// `GET /venues/{venue}/accounts/{account}/orders` (and the per-stock variant).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrdersResponse {
    pub venue: Venue,
    #[serde(default, deserialize_with = "serde_util::null_as_default::deserialize")]
    pub orders: Vec<OrderResponse>,
}

// ─── WS wire types ───────────────────────────────────────────────────────────

/// Execution feed message, sent to both sides of every trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionMessage {
    pub ok: bool,
    pub account: Account,
    pub venue: Venue,
    pub symbol: Symbol,
    pub order: OrderResponse,
    pub standing_id: OrderId,
    pub incoming_id: OrderId,
    pub price: u64,
    pub filled: u64,
    pub filled_at: DateTime<Utc>,
    pub standing_complete: bool,
    pub incoming_complete: bool,
}
