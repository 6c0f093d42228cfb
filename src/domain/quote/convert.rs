//! Conversion: QuoteResponse → Quote.

use super::wire;
use super::Quote;

impl From<wire::QuoteResponse> for Quote {
    fn from(q: wire::QuoteResponse) -> Self {
        Quote {
            venue: q.venue,
            symbol: q.symbol,
            bid: q.bid,
            ask: q.ask,
            bid_size: q.bid_size,
            ask_size: q.ask_size,
            bid_depth: q.bid_depth,
            ask_depth: q.ask_depth,
            last: q.last,
            last_size: q.last_size,
            last_trade: q.last_trade,
            quote_time: q.quote_time,
        }
    }
}

impl From<wire::TickerMessage> for Quote {
    fn from(msg: wire::TickerMessage) -> Self {
        msg.quote.into()
    }
}
