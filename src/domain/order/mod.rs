//! Order domain: placement requests, order snapshots, fills, executions.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{format_cents, parse_cents, Account, Direction, OrderId, Symbol, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::{OrderTracker, Position};

// ─── OrderType ───────────────────────────────────────────────────────────────

/// How an order interacts with the book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    /// Rests on the book at `price` until filled or cancelled.
    Limit,
    /// Takes whatever liquidity is available; price is ignored.
    Market,
    /// Fills completely at `price` or better immediately, or not at all.
    FillOrKill,
    /// Fills what it can at `price` or better immediately; the rest is cancelled.
    ImmediateOrCancel,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::FillOrKill => "fill-or-kill",
            OrderType::ImmediateOrCancel => "immediate-or-cancel",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── NewOrder ────────────────────────────────────────────────────────────────

/// Parameters for placing an order on the client's configured venue and symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    /// Limit price in cents. Ignored by the venue for market orders.
    pub price: u64,
    pub quantity: u64,
    pub direction: Direction,
    pub order_type: OrderType,
}

impl NewOrder {
    pub fn new(price: u64, quantity: u64, direction: Direction, order_type: OrderType) -> Self {
        Self {
            price,
            quantity,
            direction,
            order_type,
        }
    }

    pub fn limit(direction: Direction, price: u64, quantity: u64) -> Self {
        Self::new(price, quantity, direction, OrderType::Limit)
    }

    /// Limit order priced from a dollar string such as `"51.25"` or `"$51"`.
    pub fn limit_dollars(direction: Direction, price: &str, quantity: u64) -> Result<Self, SdkError> {
        let cents = parse_cents(price).map_err(|e| SdkError::Validation(e.to_string()))?;
        Ok(Self::limit(direction, cents, quantity))
    }

    pub fn market(direction: Direction, quantity: u64) -> Self {
        Self::new(0, quantity, direction, OrderType::Market)
    }

    pub fn fill_or_kill(direction: Direction, price: u64, quantity: u64) -> Self {
        Self::new(price, quantity, direction, OrderType::FillOrKill)
    }

    pub fn immediate_or_cancel(direction: Direction, price: u64, quantity: u64) -> Self {
        Self::new(price, quantity, direction, OrderType::ImmediateOrCancel)
    }

    /// Reject orders the venue would refuse anyway.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.quantity == 0 {
            return Err(SdkError::Validation(
                "order quantity must be greater than zero".into(),
            ));
        }
        if self.order_type != OrderType::Market && self.price == 0 {
            return Err(SdkError::Validation(format!(
                "{} order needs a price greater than zero",
                self.order_type
            )));
        }
        Ok(())
    }

    pub(crate) fn into_request(
        self,
        account: Account,
        venue: Venue,
        symbol: Symbol,
    ) -> wire::OrderRequest {
        wire::OrderRequest {
            account,
            venue,
            symbol,
            price: self.price,
            quantity: self.quantity,
            direction: self.direction,
            order_type: self.order_type,
        }
    }
}

impl std::fmt::Display for NewOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.order_type {
            OrderType::Market => write!(f, "{} {} (market)", self.direction, self.quantity),
            _ => write!(
                f,
                "{} {} @ {} ({})",
                self.direction,
                self.quantity,
                format_cents(self.price),
                self.order_type
            ),
        }
    }
}

// ─── Fill ────────────────────────────────────────────────────────────────────

/// A (partial) execution of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fill {
    pub price: u64,
    pub quantity: u64,
    pub timestamp: DateTime<Utc>,
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} @ {}", self.quantity, format_cents(self.price))
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order as last reported by the venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub account: Account,
    pub venue: Venue,
    pub symbol: Symbol,
    pub price: u64,
    pub original_quantity: u64,
    /// Quantity still outstanding.
    pub quantity: u64,
    pub direction: Direction,
    pub order_type: OrderType,
    pub id: OrderId,
    pub timestamp: DateTime<Utc>,
    pub fills: Vec<Fill>,
    pub total_filled: u64,
    pub open: bool,
}

impl Order {
    /// Shares not yet filled (zero once the order is closed).
    pub fn remaining(&self) -> u64 {
        if self.open {
            self.quantity
        } else {
            0
        }
    }

    pub fn is_filled(&self) -> bool {
        self.original_quantity > 0 && self.total_filled >= self.original_quantity
    }

    /// Sum of `price * quantity` over all fills, in cents. Saturates at `u64::MAX`.
    pub fn filled_notional(&self) -> u64 {
        self.fills.iter().fold(0u64, |acc, f| {
            acc.saturating_add(f.price.saturating_mul(f.quantity))
        })
    }

    /// Volume-weighted fill price in cents.
    pub fn average_fill_price(&self) -> Option<f64> {
        let filled = self
            .fills
            .iter()
            .fold(0u64, |acc, f| acc.saturating_add(f.quantity));
        if filled == 0 {
            return None;
        }
        Some(self.filled_notional() as f64 / filled as f64)
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} {} {}/{} {} @ {} ({}, {})",
            self.id,
            self.direction,
            self.total_filled,
            self.original_quantity,
            self.symbol,
            format_cents(self.price),
            self.order_type,
            if self.open { "open" } else { "closed" }
        )
    }
}

// ─── Execution ───────────────────────────────────────────────────────────────

/// A trade notification from the execution feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Execution {
    pub account: Account,
    pub venue: Venue,
    pub symbol: Symbol,
    /// Snapshot of the account's order after this trade.
    pub order: Order,
    pub standing_id: OrderId,
    pub incoming_id: OrderId,
    pub price: u64,
    pub filled: u64,
    pub filled_at: DateTime<Utc>,
    pub standing_complete: bool,
    pub incoming_complete: bool,
}

impl Execution {
    /// Whether the account's order was the one resting on the book.
    pub fn was_standing(&self) -> bool {
        self.order.id == self.standing_id
    }

    /// Whether this trade completed the account's order.
    pub fn completed_order(&self) -> bool {
        if self.was_standing() {
            self.standing_complete
        } else {
            self.incoming_complete
        }
    }
}
