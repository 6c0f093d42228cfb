//! Venue domain: API/venue health and the stock listing.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::Symbol;
use serde::{Deserialize, Serialize};

/// A stock traded on a venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Stock {
    pub name: String,
    pub symbol: Symbol,
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.name)
    }
}
