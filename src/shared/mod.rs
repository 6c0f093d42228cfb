//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the venue sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod latch;
pub mod price;
pub mod serde_util;

pub use latch::ErrorLatch;
pub use price::{format_cents, parse_cents, PriceParseError, CENTS_PER_DOLLAR};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── String newtypes ─────────────────────────────────────────────────────────

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The value escaped for use as a single URL path segment.
            pub fn path_segment(&self) -> std::borrow::Cow<'_, str> {
                urlencoding::encode(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s))
            }
        }
    };
}

string_newtype!(
    /// Venue (exchange) identifier, e.g. `"TESTEX"`.
    Venue
);

string_newtype!(
    /// Stock ticker symbol, e.g. `"FOOBAR"`.
    Symbol
);

string_newtype!(
    /// Trading account identifier, e.g. `"EXB123456"`.
    Account
);

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Numeric order identifier assigned by the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Order direction: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::Buy => write!(f, "Buy"),
            Direction::Sell => write!(f, "Sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_serde() {
        let venue = Venue::from("TESTEX");
        let json = serde_json::to_string(&venue).unwrap();
        assert_eq!(json, "\"TESTEX\"");
        let back: Venue = serde_json::from_str(&json).unwrap();
        assert_eq!(venue, back);
    }

    #[test]
    fn test_path_segment_escapes_reserved_characters() {
        let symbol = Symbol::new("FOO/BAR");
        assert_eq!(symbol.path_segment(), "FOO%2FBAR");
        assert_eq!(Symbol::new("FOOBAR").path_segment(), "FOOBAR");
    }

    #[test]
    fn test_order_id_transparent() {
        let id: OrderId = serde_json::from_str("1523").unwrap();
        assert_eq!(id, OrderId(1523));
        assert_eq!(id.to_string(), "1523");
    }

    #[test]
    fn test_direction_serde() {
        let buy: Direction = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, Direction::Buy);
        assert_eq!(serde_json::to_string(&Direction::Sell).unwrap(), "\"sell\"");
        assert_eq!(buy.opposite(), Direction::Sell);
    }
}
