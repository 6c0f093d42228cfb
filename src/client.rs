//! High-level client: `StockfighterClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the immutable configuration, and accessor methods.
//!
//! Configuration never changes after `build()`. To talk to another venue or
//! stock, derive a new client with [`StockfighterClient::with_venue`] and friends;
//! the derived client shares the HTTP connection pool.

use crate::auth::ApiKey;
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::quote::client::Quotes;
use crate::domain::venue::client::Venues;
use crate::error::{AuthError, SdkError};
use crate::http::{RetryPolicy, StockfighterHttp, DEFAULT_TIMEOUT};
use crate::network::{DEFAULT_API_URL, DEFAULT_WS_URL, TEST_ACCOUNT, TEST_SYMBOL, TEST_VENUE};
use crate::shared::{Account, Symbol, Venue};
use crate::ws::WsConfig;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::venue::client::Venues as VenuesClient;

/// Read-only settings shared by a client and everything it hands out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub ws_url: String,
    pub account: Option<Account>,
    pub venue: Option<Venue>,
    pub symbol: Option<Symbol>,
}

/// The primary entry point for the Stockfighter SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.venues()`, `client.quotes()`, `client.orders()`, etc.
#[derive(Debug, Clone)]
pub struct StockfighterClient {
    pub(crate) http: StockfighterHttp,
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) ws_config: WsConfig,
}

impl StockfighterClient {
    pub fn builder() -> StockfighterClientBuilder {
        StockfighterClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn venues(&self) -> Venues<'_> {
        Venues { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Configuration ────────────────────────────────────────────────────

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_api_key(&self) -> bool {
        self.http.has_api_key()
    }

    pub fn venue(&self) -> Result<&Venue, SdkError> {
        self.config
            .venue
            .as_ref()
            .ok_or_else(|| SdkError::Validation("no venue configured".into()))
    }

    pub fn symbol(&self) -> Result<&Symbol, SdkError> {
        self.config
            .symbol
            .as_ref()
            .ok_or_else(|| SdkError::Validation("no symbol configured".into()))
    }

    pub fn account(&self) -> Result<&Account, SdkError> {
        self.config
            .account
            .as_ref()
            .ok_or_else(|| SdkError::Validation("no account configured".into()))
    }

    pub(crate) fn ensure_authenticated(&self) -> Result<(), SdkError> {
        if self.http.has_api_key() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated.into())
        }
    }

    fn derive(&self, update: impl FnOnce(&mut ClientConfig)) -> Self {
        let mut config = (*self.config).clone();
        update(&mut config);
        Self {
            http: self.http.clone(),
            config: Arc::new(config),
            ws_config: self.ws_config.clone(),
        }
    }

    /// A client for another venue, sharing this client's connections.
    pub fn with_venue(&self, venue: impl Into<Venue>) -> Self {
        let venue = venue.into();
        self.derive(|c| c.venue = Some(venue))
    }

    pub fn with_symbol(&self, symbol: impl Into<Symbol>) -> Self {
        let symbol = symbol.into();
        self.derive(|c| c.symbol = Some(symbol))
    }

    pub fn with_account(&self, account: impl Into<Account>) -> Self {
        let account = account.into();
        self.derive(|c| c.account = Some(account))
    }

    // ── WebSocket ────────────────────────────────────────────────────────

    /// WS config for creating a WebSocket connection.
    ///
    /// The WS client is not embedded in `StockfighterClient`; feed lifetimes
    /// are managed by the application.
    pub fn ws_config(&self) -> &WsConfig {
        &self.ws_config
    }

    /// A native WS client for any feed.
    #[cfg(feature = "ws-native")]
    pub fn ws_native(&self, feed: crate::ws::Feed) -> crate::ws::native::WsClient {
        crate::ws::native::WsClient::new(self.ws_config.clone(), feed)
    }

    /// Quote feed for every stock on the configured venue.
    #[cfg(feature = "ws-native")]
    pub fn tickertape(&self) -> Result<crate::ws::native::WsClient, SdkError> {
        let feed = crate::ws::Feed::tickertape(self.account()?.clone(), self.venue()?.clone());
        Ok(self.ws_native(feed))
    }

    /// Quote feed for the configured stock.
    #[cfg(feature = "ws-native")]
    pub fn tickertape_for_stock(&self) -> Result<crate::ws::native::WsClient, SdkError> {
        let feed = crate::ws::Feed::tickertape_for_stock(
            self.account()?.clone(),
            self.venue()?.clone(),
            self.symbol()?.clone(),
        );
        Ok(self.ws_native(feed))
    }

    /// Fill notifications for the configured account on the configured venue.
    #[cfg(feature = "ws-native")]
    pub fn executions(&self) -> Result<crate::ws::native::WsClient, SdkError> {
        let feed = crate::ws::Feed::executions(self.account()?.clone(), self.venue()?.clone());
        Ok(self.ws_native(feed))
    }

    #[cfg(feature = "ws-native")]
    pub fn executions_for_stock(&self) -> Result<crate::ws::native::WsClient, SdkError> {
        let feed = crate::ws::Feed::executions_for_stock(
            self.account()?.clone(),
            self.venue()?.clone(),
            self.symbol()?.clone(),
        );
        Ok(self.ws_native(feed))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StockfighterClientBuilder {
    base_url: String,
    ws_url: String,
    api_key: Option<String>,
    account: Option<Account>,
    venue: Option<Venue>,
    symbol: Option<Symbol>,
    timeout: Duration,
    read_retry: RetryPolicy,
    ws_reconnect: bool,
}

impl Default for StockfighterClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            api_key: None,
            account: None,
            venue: None,
            symbol: None,
            timeout: DEFAULT_TIMEOUT,
            read_retry: RetryPolicy::None,
            ws_reconnect: false,
        }
    }
}

impl StockfighterClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn ws_url(mut self, url: &str) -> Self {
        self.ws_url = url.to_string();
        self
    }

    /// API key, validated in [`build`](Self::build).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn account(mut self, account: impl Into<Account>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn venue(mut self, venue: impl Into<Venue>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy for read endpoints. Order placement and cancellation are never retried.
    pub fn read_retry(mut self, policy: RetryPolicy) -> Self {
        self.read_retry = policy;
        self
    }

    /// Reconnect dropped WebSocket feeds with backoff.
    pub fn ws_reconnect(mut self, enabled: bool) -> Self {
        self.ws_reconnect = enabled;
        self
    }

    /// Preset the always-on test exchange: `TESTEX`, `FOOBAR`, `EXB123456`.
    pub fn test_venue(self) -> Self {
        self.venue(TEST_VENUE).symbol(TEST_SYMBOL).account(TEST_ACCOUNT)
    }

    pub fn build(self) -> Result<StockfighterClient, SdkError> {
        let api_key = self.api_key.map(ApiKey::new).transpose()?;
        let http = StockfighterHttp::new(&self.base_url, api_key, self.timeout, self.read_retry)?;

        tracing::debug!(
            base_url = %http.base_url(),
            authenticated = http.has_api_key(),
            "Built Stockfighter client"
        );

        Ok(StockfighterClient {
            config: Arc::new(ClientConfig {
                base_url: http.base_url().to_string(),
                ws_url: self.ws_url.clone(),
                account: self.account,
                venue: self.venue,
                symbol: self.symbol,
            }),
            ws_config: WsConfig {
                url: self.ws_url,
                reconnect: self.ws_reconnect,
                ..WsConfig::default()
            },
            http,
        })
    }
}
