//! Native WebSocket client: `tokio-tungstenite`.
//!
//! - Background tokio task owns the connection for one [`Feed`]
//! - WS-level pings answered automatically
//! - Optional exponential backoff reconnection with jitter
//! - Stream-based event delivery through a bounded channel (full → dropped)

use std::pin::Pin;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream, Stream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::WsError;
use crate::ws::{parse_message, Feed, FeedKind, ReadyState, WsConfig, WsEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

enum Command {
    Disconnect,
}

enum DisconnectReason {
    UserRequested,
    NormalClose,
    Error(String),
}

// ─── Background task state ───────────────────────────────────────────────────

struct TaskState {
    config: WsConfig,
    url: String,
    kind: FeedKind,
    event_tx: mpsc::Sender<WsEvent>,
    cmd_rx: mpsc::Receiver<Command>,
    reconnect_attempts: u32,
    ready_state: Arc<AtomicU16>,
}

impl TaskState {
    /// Never blocks: a slow consumer loses events instead of stalling the feed.
    fn emit(&self, event: WsEvent) {
        if let Err(mpsc::error::TrySendError::Full(event)) = self.event_tx.try_send(event) {
            tracing::debug!(url = %self.url, "Event channel full, dropping {:?}", event);
        }
    }

    fn should_reconnect(&self) -> bool {
        self.config.reconnect && self.reconnect_attempts < self.config.max_reconnect_attempts
    }

    fn set_state(&self, state: ReadyState) {
        self.ready_state.store(state as u16, Ordering::SeqCst);
    }
}

// ─── Public WsClient ─────────────────────────────────────────────────────────

/// Native WebSocket client for one feed.
///
/// Uses a background tokio task for connection management.
/// The public API communicates with it via mpsc channels.
pub struct WsClient {
    config: WsConfig,
    feed: Feed,
    cmd_tx: Option<mpsc::Sender<Command>>,
    event_rx: tokio::sync::Mutex<mpsc::Receiver<WsEvent>>,
    event_tx: mpsc::Sender<WsEvent>,
    task_handle: Option<JoinHandle<()>>,
    ready_state: Arc<AtomicU16>,
}

impl WsClient {
    /// Create a new WS client. Does not connect yet.
    pub fn new(config: WsConfig, feed: Feed) -> Self {
        let (event_tx, event_rx) = mpsc::channel(config.event_buffer.max(1));
        Self {
            config,
            feed,
            cmd_tx: None,
            event_rx: tokio::sync::Mutex::new(event_rx),
            event_tx,
            task_handle: None,
            ready_state: Arc::new(AtomicU16::new(ReadyState::Closed as u16)),
        }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// The endpoint this client connects to.
    pub fn url(&self) -> String {
        self.feed.url(&self.config.url)
    }

    /// Start the background connection task.
    ///
    /// Returns immediately; watch [`events`](Self::events) for `Connected`
    /// or `Error`. Calling it again while running is a no-op. Once the task
    /// has given up (after `MaxReconnectReached`), this starts a fresh one.
    pub async fn connect(&mut self) -> Result<(), WsError> {
        if let Some(handle) = self.task_handle.take() {
            if !handle.is_finished() && self.ready_state() != ReadyState::Closed {
                self.task_handle = Some(handle);
                return Ok(());
            }
            // A closed task only has its return left to run.
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
            self.cmd_tx = None;
        }

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        self.cmd_tx = Some(cmd_tx);
        self.ready_state
            .store(ReadyState::Connecting as u16, Ordering::SeqCst);

        let state = TaskState {
            config: self.config.clone(),
            url: self.url(),
            kind: self.feed.kind,
            event_tx: self.event_tx.clone(),
            cmd_rx,
            reconnect_attempts: 0,
            ready_state: Arc::clone(&self.ready_state),
        };

        self.task_handle = Some(tokio::spawn(run_task(state)));
        Ok(())
    }

    /// Close the connection and wait (up to five seconds) for the task to finish.
    pub async fn disconnect(&mut self) -> Result<(), WsError> {
        if let Some(tx) = self.cmd_tx.take() {
            self.ready_state
                .store(ReadyState::Closing as u16, Ordering::SeqCst);
            let _ = tx.send(Command::Disconnect).await;
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }

        self.ready_state
            .store(ReadyState::Closed as u16, Ordering::SeqCst);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.ready_state() == ReadyState::Open
    }

    pub fn ready_state(&self) -> ReadyState {
        ReadyState::from(self.ready_state.load(Ordering::SeqCst))
    }

    /// Get a stream of events from the WebSocket connection.
    ///
    /// The returned stream borrows `self`, so it must be dropped
    /// before calling `disconnect()`.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = WsEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(&self.event_rx, |rx| async move {
            let mut guard = rx.lock().await;
            guard.recv().await.map(|event| (event, rx))
        }))
    }
}

impl Drop for WsClient {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

async fn run_task(mut state: TaskState) {
    loop {
        let (sink, stream) = match attempt_connect(&state.url).await {
            Ok(parts) => parts,
            Err(e) => {
                tracing::error!(url = %state.url, "WebSocket connection failed: {}", e);
                state.emit(WsEvent::Error(format!("Connection failed: {}", e)));

                if state.should_reconnect() {
                    if backoff_sleep(&mut state).await {
                        continue;
                    }
                    state.set_state(ReadyState::Closed);
                    return;
                }
                state.set_state(ReadyState::Closed);
                state.emit(WsEvent::MaxReconnectReached);
                return;
            }
        };

        state.reconnect_attempts = 0;
        state.set_state(ReadyState::Open);
        tracing::info!(url = %state.url, "WebSocket connected");
        state.emit(WsEvent::Connected);

        match run_connected(&mut state, sink, stream).await {
            DisconnectReason::UserRequested => {
                state.set_state(ReadyState::Closed);
                return;
            }
            DisconnectReason::NormalClose => {
                tracing::info!(url = %state.url, "WebSocket closed by venue");
            }
            DisconnectReason::Error(reason) => {
                tracing::warn!(url = %state.url, reason = %reason, "WebSocket dropped");
            }
        }

        if state.should_reconnect() {
            state.set_state(ReadyState::Connecting);
            if backoff_sleep(&mut state).await {
                continue;
            }
            state.set_state(ReadyState::Closed);
            return;
        }
        // Closed must be visible before the terminal event.
        state.set_state(ReadyState::Closed);
        state.emit(WsEvent::MaxReconnectReached);
        return;
    }
}

/// The connected loop. Runs until the connection breaks or the user disconnects.
async fn run_connected(
    state: &mut TaskState,
    mut sink: SplitSink<WsStream, Message>,
    mut stream: SplitStream<WsStream>,
) -> DisconnectReason {
    loop {
        tokio::select! {
            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let text_str: &str = text.as_ref();
                        match parse_message(state.kind, text_str) {
                            Ok(kind) => state.emit(WsEvent::Message(kind)),
                            Err(e) => {
                                tracing::warn!("WS message error: {} (raw: {})", e, text_str);
                                state.emit(WsEvent::Error(e.to_string()));
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(frame))) => {
                        let (code, reason) = extract_close(frame.as_ref());
                        tracing::info!(code, reason = %reason, "WebSocket closed by server");
                        state.emit(WsEvent::Disconnected {
                            code: Some(code),
                            reason: reason.clone(),
                        });
                        return match code {
                            1000 => DisconnectReason::NormalClose,
                            _ => DisconnectReason::Error(reason),
                        };
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        let reason = e.to_string();
                        tracing::error!("WebSocket error: {}", reason);
                        state.emit(WsEvent::Disconnected {
                            code: None,
                            reason: reason.clone(),
                        });
                        return DisconnectReason::Error(reason);
                    }
                    None => {
                        state.emit(WsEvent::Disconnected {
                            code: None,
                            reason: "Stream ended".into(),
                        });
                        return DisconnectReason::Error("Stream ended".into());
                    }
                }
            }

            // Disconnect, or `None` once the WsClient is dropped.
            _ = state.cmd_rx.recv() => {
                let _ = sink.send(Message::Close(Some(CloseFrame {
                    code: CloseCode::Normal,
                    reason: "Client disconnect".into(),
                }))).await;
                return DisconnectReason::UserRequested;
            }
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

async fn attempt_connect(
    url: &str,
) -> Result<(SplitSink<WsStream, Message>, SplitStream<WsStream>), WsError> {
    let (ws_stream, _) = tokio::time::timeout(CONNECT_TIMEOUT, connect_async(url))
        .await
        .map_err(|_| WsError::ConnectionFailed("Connection timeout".into()))?
        .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;

    Ok(ws_stream.split())
}

/// Extract close code and reason from an optional CloseFrame.
fn extract_close(frame: Option<&CloseFrame>) -> (u16, String) {
    match frame {
        Some(f) => (f.code.into(), f.reason.to_string()),
        None => (1006, "No close frame".into()),
    }
}

fn reconnect_delay_ms(base_ms: u32, attempt: u32) -> u32 {
    let exp = attempt.saturating_sub(1).min(10);
    let jitter = rand::random::<u32>() % 500;
    base_ms
        .saturating_mul(1u32 << exp)
        .saturating_add(jitter)
        .min(60_000)
}

/// Sleep before the next attempt. Returns `false` if a disconnect arrived meanwhile.
async fn backoff_sleep(state: &mut TaskState) -> bool {
    state.reconnect_attempts += 1;
    let delay = reconnect_delay_ms(state.config.base_reconnect_delay_ms, state.reconnect_attempts);

    tracing::info!(
        "Reconnect attempt {}/{} in {}ms",
        state.reconnect_attempts,
        state.config.max_reconnect_attempts,
        delay
    );

    tokio::select! {
        _ = tokio::time::sleep(Duration::from_millis(delay as u64)) => true,
        _ = state.cmd_rx.recv() => false,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
