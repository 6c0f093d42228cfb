//! # Stockfighter SDK
//!
//! An async Rust client for the Stockfighter trading-game venue API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Newtypes, domain models, wire types, state containers (always available)
//! 2. **Auth**: The validated API key
//! 3. **HTTP API**: `StockfighterHttp` with per-endpoint retry policies
//! 4. **WebSocket**: Tickertape and execution feeds over `tokio-tungstenite`
//! 5. **High-Level Client**: `StockfighterClient` with nested sub-clients and immutable config
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockfighter_sdk::prelude::*;
//!
//! let client = StockfighterClient::builder()
//!     .api_key(std::env::var("STOCKFIGHTER_API_KEY")?)
//!     .test_venue()
//!     .build()?;
//!
//! let quote = client.quotes().get().await?;
//! let order = client
//!     .orders()
//!     .place(&NewOrder::limit(Direction::Buy, 5100, 100))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, price helpers, and the error latch.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// API key handling.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: WebSocket ───────────────────────────────────────────────────────

/// WebSocket feeds: descriptors, messages, events.
pub mod ws;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `StockfighterClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        format_cents, parse_cents, Account, Direction, ErrorLatch, OrderId, Symbol, Venue,
    };

    // Domain types
    pub use crate::domain::order::{Execution, Fill, NewOrder, Order, OrderType};
    pub use crate::domain::orderbook::{OrderBook, PriceLevel};
    pub use crate::domain::quote::Quote;
    pub use crate::domain::venue::Stock;

    // State containers
    pub use crate::domain::order::{OrderTracker, Position};
    pub use crate::domain::quote::QuoteBoard;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError, WsError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ClientConfig, OrderbooksClient, OrdersClient, QuotesClient, StockfighterClient,
        StockfighterClientBuilder, VenuesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // WebSocket types
    pub use crate::ws::{Feed, FeedKind, Kind, WsConfig, WsEvent};
    #[cfg(feature = "ws-native")]
    pub use crate::ws::native::WsClient;
}
