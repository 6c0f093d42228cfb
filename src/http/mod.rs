//! HTTP client layer: `StockfighterHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::{StockfighterHttp, DEFAULT_TIMEOUT};
pub use retry::{RetryConfig, RetryPolicy};
