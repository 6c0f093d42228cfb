//! Orderbooks sub-client.

use crate::client::StockfighterClient;
use crate::domain::orderbook::OrderBook;
use crate::error::SdkError;

/// Sub-client for orderbook operations.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Orderbooks<'a> {
    /// Current orderbook for the configured venue and symbol (never cached).
    pub async fn get(&self) -> Result<OrderBook, SdkError> {
        let venue = self.client.venue()?;
        let symbol = self.client.symbol()?;
        let resp = self.client.http.get_orderbook(venue, symbol).await?;
        Ok(resp.into())
    }
}
