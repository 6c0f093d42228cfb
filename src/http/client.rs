//! Low-level HTTP client: `StockfighterHttp`.
//!
//! One method per venue endpoint. Returns wire types (conversion to domain
//! types happens in the sub-clients). Internal to the SDK: `StockfighterClient`
//! wraps this.

use crate::auth::ApiKey;
use crate::domain::order::wire::{OrderRequest, OrderResponse, OrdersResponse};
use crate::domain::orderbook::wire::OrderbookResponse;
use crate::domain::quote::wire::QuoteResponse;
use crate::domain::venue::wire::{HeartbeatResponse, StocksResponse, VenueHeartbeatResponse};
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::AUTH_HEADER;
use crate::shared::{Account, OrderId, Symbol, Venue};

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint paths relative to the API base URL.
pub mod paths {
    use crate::shared::{Account, OrderId, Symbol, Venue};

    pub fn heartbeat() -> String {
        "/heartbeat".to_string()
    }

    pub fn venue_heartbeat(venue: &Venue) -> String {
        format!("/venues/{}/heartbeat", venue.path_segment())
    }

    pub fn stocks(venue: &Venue) -> String {
        format!("/venues/{}/stocks", venue.path_segment())
    }

    pub fn orderbook(venue: &Venue, symbol: &Symbol) -> String {
        format!(
            "/venues/{}/stocks/{}",
            venue.path_segment(),
            symbol.path_segment()
        )
    }

    pub fn quote(venue: &Venue, symbol: &Symbol) -> String {
        format!("{}/quote", orderbook(venue, symbol))
    }

    pub fn orders(venue: &Venue, symbol: &Symbol) -> String {
        format!("{}/orders", orderbook(venue, symbol))
    }

    pub fn order(venue: &Venue, symbol: &Symbol, id: OrderId) -> String {
        format!("{}/{}", orders(venue, symbol), id)
    }

    pub fn account_orders(venue: &Venue, account: &Account) -> String {
        format!(
            "/venues/{}/accounts/{}/orders",
            venue.path_segment(),
            account.path_segment()
        )
    }

    pub fn account_stock_orders(venue: &Venue, account: &Account, symbol: &Symbol) -> String {
        format!(
            "/venues/{}/accounts/{}/stocks/{}/orders",
            venue.path_segment(),
            account.path_segment(),
            symbol.path_segment()
        )
    }
}

/// Error body: `{"ok": false, "error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Low-level HTTP client for the Stockfighter REST API.
#[derive(Clone)]
pub struct StockfighterHttp {
    base_url: String,
    client: Client,
    /// Sent as `X-Starfighter-Authorization`. Never exposed publicly.
    api_key: Option<ApiKey>,
    read_retry: RetryPolicy,
}

impl std::fmt::Debug for StockfighterHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockfighterHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("read_retry", &self.read_retry)
            .finish()
    }
}

impl StockfighterHttp {
    pub fn new(
        base_url: &str,
        api_key: Option<ApiKey>,
        timeout: Duration,
        read_retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
            read_retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Venue ────────────────────────────────────────────────────────────

    pub async fn heartbeat(&self) -> Result<HeartbeatResponse, HttpError> {
        let url = self.url(&paths::heartbeat());
        self.get(&url).await
    }

    pub async fn venue_heartbeat(&self, venue: &Venue) -> Result<VenueHeartbeatResponse, HttpError> {
        let url = self.url(&paths::venue_heartbeat(venue));
        self.get(&url).await
    }

    pub async fn get_stocks(&self, venue: &Venue) -> Result<StocksResponse, HttpError> {
        let url = self.url(&paths::stocks(venue));
        self.get(&url).await
    }

    // ── Market data ──────────────────────────────────────────────────────

    pub async fn get_orderbook(
        &self,
        venue: &Venue,
        symbol: &Symbol,
    ) -> Result<OrderbookResponse, HttpError> {
        let url = self.url(&paths::orderbook(venue, symbol));
        self.get(&url).await
    }

    pub async fn get_quote(&self, venue: &Venue, symbol: &Symbol) -> Result<QuoteResponse, HttpError> {
        let url = self.url(&paths::quote(venue, symbol));
        self.get(&url).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, HttpError> {
        let url = self.url(&paths::orders(&request.venue, &request.symbol));
        self.request_with_retry(Method::POST, &url, Some(request), RetryPolicy::None)
            .await
    }

    pub async fn cancel_order(
        &self,
        venue: &Venue,
        symbol: &Symbol,
        id: OrderId,
    ) -> Result<OrderResponse, HttpError> {
        let url = self.url(&paths::order(venue, symbol, id));
        self.request_with_retry(Method::DELETE, &url, None::<&()>, RetryPolicy::None)
            .await
    }

    pub async fn get_order(
        &self,
        venue: &Venue,
        symbol: &Symbol,
        id: OrderId,
    ) -> Result<OrderResponse, HttpError> {
        let url = self.url(&paths::order(venue, symbol, id));
        self.get(&url).await
    }

    pub async fn get_account_orders(
        &self,
        venue: &Venue,
        account: &Account,
    ) -> Result<OrdersResponse, HttpError> {
        let url = self.url(&paths::account_orders(venue, account));
        self.get(&url).await
    }

    pub async fn get_stock_orders(
        &self,
        venue: &Venue,
        account: &Account,
        symbol: &Symbol,
    ) -> Result<OrdersResponse, HttpError> {
        let url = self.url(&paths::account_stock_orders(venue, account, symbol));
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request_with_retry(Method::GET, url, None::<&()>, self.read_retry.clone())
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry.config() {
            None => return self.do_request(&method, url, body).await,
            Some(config) => config,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.is_retryable_status(*status),
                        HttpError::RateLimited { retry_after_ms, .. } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.is_retryable_status(429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if attempt > 0 && should_retry {
                        return Err(HttpError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(key) = &self.api_key {
            req = req.header(AUTH_HEADER, key.expose());
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %method, url, "Sending request");

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status().as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await?;

        if (200..300).contains(&status) {
            return decode_success(status, &body_text);
        }

        Err(map_status_error(status, &body_text, retry_after_ms))
    }
}

/// Decode a 2xx body, treating `"ok": false` as a venue error.
pub(crate) fn decode_success<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, HttpError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))?;

    if value.get("ok").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("venue reported failure")
            .to_string();
        return Err(HttpError::Venue { status, message });
    }

    serde_json::from_value(value).map_err(|e| HttpError::Decode(e.to_string()))
}

/// Map a non-2xx response to an `HttpError`, keeping the venue's message.
pub(crate) fn map_status_error(status: u16, body: &str, retry_after_ms: Option<u64>) -> HttpError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg) }) if !msg.is_empty() => msg,
        Ok(_) => format!("HTTP {}", status),
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {}", status)
            } else {
                tracing::warn!(status, "Non-JSON error body from venue");
                trimmed.to_string()
            }
        }
    };

    match status {
        401 => HttpError::Unauthorized(message),
        404 => HttpError::NotFound(message),
        429 => HttpError::RateLimited {
            message,
            retry_after_ms,
        },
        400 => HttpError::BadRequest(message),
        500..=599 => HttpError::ServerError {
            status,
            body: message,
        },
        _ => HttpError::Venue { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::venue::wire::VenueHeartbeatResponse;

    #[test]
    fn test_paths() {
        let venue = Venue::from("TESTEX");
        let symbol = Symbol::from("FOOBAR");
        let account = Account::from("EXB123456");

        assert_eq!(paths::heartbeat(), "/heartbeat");
        assert_eq!(paths::venue_heartbeat(&venue), "/venues/TESTEX/heartbeat");
        assert_eq!(paths::stocks(&venue), "/venues/TESTEX/stocks");
        assert_eq!(paths::orderbook(&venue, &symbol), "/venues/TESTEX/stocks/FOOBAR");
        assert_eq!(paths::quote(&venue, &symbol), "/venues/TESTEX/stocks/FOOBAR/quote");
        assert_eq!(paths::orders(&venue, &symbol), "/venues/TESTEX/stocks/FOOBAR/orders");
        assert_eq!(
            paths::order(&venue, &symbol, OrderId(1523)),
            "/venues/TESTEX/stocks/FOOBAR/orders/1523"
        );
        assert_eq!(
            paths::account_orders(&venue, &account),
            "/venues/TESTEX/accounts/EXB123456/orders"
        );
        assert_eq!(
            paths::account_stock_orders(&venue, &account, &symbol),
            "/venues/TESTEX/accounts/EXB123456/stocks/FOOBAR/orders"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let http = StockfighterHttp::new(
            "https://api.stockfighter.io/ob/api/",
            None,
            DEFAULT_TIMEOUT,
            RetryPolicy::None,
        )
        .unwrap();
        assert_eq!(http.base_url(), "https://api.stockfighter.io/ob/api");
        assert_eq!(http.url("/heartbeat"), "https://api.stockfighter.io/ob/api/heartbeat");
        assert!(!http.has_api_key());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let http = StockfighterHttp::new(
            "http://localhost",
            Some(ApiKey::new("topsecret").unwrap()),
            DEFAULT_TIMEOUT,
            RetryPolicy::None,
        )
        .unwrap();
        assert!(!format!("{:?}", http).contains("topsecret"));
    }

    #[test]
    fn test_decode_success() {
        let resp: VenueHeartbeatResponse =
            decode_success(200, r#"{"ok": true, "venue": "TESTEX"}"#).unwrap();
        assert_eq!(resp.venue, Venue::from("TESTEX"));
    }

    #[test]
    fn test_decode_success_ok_false_is_venue_error() {
        let err = decode_success::<VenueHeartbeatResponse>(
            200,
            r#"{"ok": false, "error": "venue is down"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HttpError::Venue { status: 200, ref message } if message == "venue is down"
        ));
    }

    #[test]
    fn test_decode_success_bad_json() {
        let err = decode_success::<VenueHeartbeatResponse>(200, "<html>").unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
        let err = decode_success::<VenueHeartbeatResponse>(200, r#"{"ok": true}"#).unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }

    #[test]
    fn test_map_status_error_uses_venue_message() {
        let err = map_status_error(
            404,
            r#"{"ok": false, "error": "No venue exists with the symbol NOPE"}"#,
            None,
        );
        assert!(matches!(err, HttpError::NotFound(ref m) if m == "No venue exists with the symbol NOPE"));

        let err = map_status_error(401, r#"{"ok": false, "error": "Bad API key"}"#, None);
        assert!(matches!(err, HttpError::Unauthorized(ref m) if m == "Bad API key"));

        let err = map_status_error(403, r#"{"ok": false, "error": "Not your account"}"#, None);
        assert!(matches!(
            err,
            HttpError::Venue { status: 403, ref message } if message == "Not your account"
        ));
    }

    #[test]
    fn test_map_status_error_fallbacks() {
        let err = map_status_error(502, "Bad Gateway", None);
        assert!(matches!(
            err,
            HttpError::ServerError { status: 502, ref body } if body == "Bad Gateway"
        ));

        let err = map_status_error(400, "", None);
        assert!(matches!(err, HttpError::BadRequest(ref m) if m == "HTTP 400"));

        let err = map_status_error(429, "", Some(2000));
        assert!(matches!(
            err,
            HttpError::RateLimited { retry_after_ms: Some(2000), ref message } if message == "HTTP 429"
        ));
    }

    #[test]
    fn test_rate_limit_keeps_venue_message() {
        let err = map_status_error(429, r#"{"ok": false, "error": "slow down, 10 req/s max"}"#, None);
        assert_eq!(err.venue_message(), Some("slow down, 10 req/s max"));
        assert_eq!(err.status(), Some(429));
    }
}
