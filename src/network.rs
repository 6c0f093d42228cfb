//! Network constants for the Stockfighter venue.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.stockfighter.io/ob/api";

/// Default WebSocket base URL (feeds append `/{account}/venues/{venue}/...`).
pub const DEFAULT_WS_URL: &str = "wss://api.stockfighter.io/ob/api/ws";

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";

/// Always-on test exchange.
pub const TEST_VENUE: &str = "TESTEX";

/// Stock listed on the test exchange.
pub const TEST_SYMBOL: &str = "FOOBAR";

/// Account accepted by the test exchange.
pub const TEST_ACCOUNT: &str = "EXB123456";
