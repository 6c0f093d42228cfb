//! WebSocket layer: feeds, inbound messages, events.
//!
//! The transport lives in `native.rs` (`ws-native` feature, `tokio-tungstenite`).
//! This module defines the shared feed/message/event types, which compile
//! without any transport.

pub mod feed;

#[cfg(feature = "ws-native")]
pub mod native;

use crate::domain::order::wire::ExecutionMessage;
use crate::domain::order::Execution;
use crate::domain::quote::wire::TickerMessage;
use crate::domain::quote::Quote;
use crate::error::WsError;

pub use feed::{Feed, FeedKind};

// ─── Inbound messages ────────────────────────────────────────────────────────

/// A decoded message from a feed.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Tickertape update.
    Quote(Quote),
    /// A fill on one of the account's orders.
    Execution(Box<Execution>),
}

/// Decode a text frame according to the feed it arrived on.
///
/// Both feeds wrap their payload in an `ok` envelope; `"ok": false` is a
/// protocol error carrying the venue's message.
pub fn parse_message(kind: FeedKind, text: &str) -> Result<Kind, WsError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| WsError::DeserializationError(e.to_string()))?;

    if value.get("ok").and_then(serde_json::Value::as_bool) == Some(false) {
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("feed reported failure");
        return Err(WsError::ProtocolError(message.to_string()));
    }

    match kind {
        FeedKind::Tickertape => serde_json::from_value::<TickerMessage>(value)
            .map(|msg| Kind::Quote(msg.into())),
        FeedKind::Executions => serde_json::from_value::<ExecutionMessage>(value)
            .map(|msg| Kind::Execution(Box::new(msg.into()))),
    }
    .map_err(|e| WsError::DeserializationError(e.to_string()))
}

// ─── WsEvent ─────────────────────────────────────────────────────────────────

/// High-level events emitted by the WS client to the consumer.
#[derive(Debug, Clone)]
pub enum WsEvent {
    /// Connection established.
    Connected,
    /// A parsed message from the feed.
    Message(Kind),
    /// Connection lost (may trigger reconnect).
    Disconnected { code: Option<u16>, reason: String },
    /// A deserialization or connection error.
    Error(String),
    /// The client gave up reconnecting (or reconnect is off).
    MaxReconnectReached,
}

/// Connection state of a WS client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ReadyState {
    Connecting = 0,
    Open = 1,
    Closing = 2,
    Closed = 3,
}

impl From<u16> for ReadyState {
    fn from(v: u16) -> Self {
        match v {
            0 => ReadyState::Connecting,
            1 => ReadyState::Open,
            2 => ReadyState::Closing,
            _ => ReadyState::Closed,
        }
    }
}

/// Configuration for the WS client.
#[derive(Debug, Clone)]
pub struct WsConfig {
    /// Base URL; feeds append their own path.
    pub url: String,
    pub reconnect: bool,
    pub base_reconnect_delay_ms: u32,
    pub max_reconnect_attempts: u32,
    /// Capacity of the event channel. Events are dropped when it is full.
    pub event_buffer: usize,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: crate::network::DEFAULT_WS_URL.to_string(),
            reconnect: false,
            base_reconnect_delay_ms: 1000,
            max_reconnect_attempts: 10,
            event_buffer: 256,
        }
    }
}
