//! Conversion: OrderbookResponse → OrderBook.

use super::wire;
use super::{OrderBook, PriceLevel};

impl From<wire::RestBookLevel> for PriceLevel {
    fn from(level: wire::RestBookLevel) -> Self {
        PriceLevel {
            price: level.price,
            quantity: level.qty,
        }
    }
}

impl From<wire::OrderbookResponse> for OrderBook {
    fn from(resp: wire::OrderbookResponse) -> Self {
        OrderBook {
            venue: resp.venue,
            symbol: resp.symbol,
            bids: resp.bids.into_iter().map(PriceLevel::from).collect(),
            asks: resp.asks.into_iter().map(PriceLevel::from).collect(),
            timestamp: resp.ts,
        }
    }
}
