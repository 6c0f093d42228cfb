//! First-error latch for callers that prefer checking errors after a batch of calls.
//!
//! ```rust,ignore
//! let latch = ErrorLatch::new();
//! let quote = latch.record(client.quotes().get().await);
//! let book = latch.record(client.orderbooks().get().await);
//! if let Some(err) = latch.err() {
//!     eprintln!("first failure: {err}");
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::SdkError;

/// Keeps the first error recorded into it.
///
/// Later errors are dropped and successes never clear the stored error;
/// only [`ErrorLatch::take`] resets it. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    slot: Arc<Mutex<Option<Arc<SdkError>>>>,
}

impl ErrorLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap a call result, latching the error if none is stored yet.
    pub fn record<T>(&self, result: Result<T, SdkError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                let mut slot = self.lock();
                if slot.is_none() {
                    tracing::debug!(error = %e, "Latching first error");
                    *slot = Some(Arc::new(e));
                } else {
                    tracing::debug!(error = %e, "Error dropped, latch already set");
                }
                None
            }
        }
    }

    /// The latched error, if any.
    pub fn err(&self) -> Option<Arc<SdkError>> {
        self.lock().clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Remove and return the latched error.
    pub fn take(&self) -> Option<Arc<SdkError>> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<SdkError>>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
