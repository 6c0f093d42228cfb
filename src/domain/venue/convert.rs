//! Conversions: venue wire types → domain types.

use super::wire;
use super::Stock;

impl From<wire::StockEntry> for Stock {
    fn from(entry: wire::StockEntry) -> Self {
        Stock {
            name: entry.name,
            symbol: entry.symbol,
        }
    }
}
