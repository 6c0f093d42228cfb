//! Orders sub-client: place, cancel, query.
//!
//! Every call acts on the configured account and needs an API key.

use crate::client::StockfighterClient;
use crate::domain::order::{NewOrder, Order};
use crate::error::SdkError;
use crate::shared::OrderId;

pub struct Orders<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Orders<'a> {
    /// Place an order on the configured venue and symbol. Never retried.
    pub async fn place(&self, order: &NewOrder) -> Result<Order, SdkError> {
        self.client.ensure_authenticated()?;
        order.validate()?;
        let request = order.into_request(
            self.client.account()?.clone(),
            self.client.venue()?.clone(),
            self.client.symbol()?.clone(),
        );
        let resp = self.client.http.place_order(&request).await?;
        let placed = Order::from(resp);
        tracing::debug!(requested = %order, "Order placed: {}", placed);
        Ok(placed)
    }

    /// Cancel an order. Returns its final state. Never retried.
    pub async fn cancel(&self, id: OrderId) -> Result<Order, SdkError> {
        self.client.ensure_authenticated()?;
        let venue = self.client.venue()?;
        let symbol = self.client.symbol()?;
        let resp = self.client.http.cancel_order(venue, symbol, id).await?;
        let cancelled = Order::from(resp);
        tracing::debug!("Order cancelled: {}", cancelled);
        Ok(cancelled)
    }

    /// Current state of a single order.
    pub async fn status(&self, id: OrderId) -> Result<Order, SdkError> {
        self.client.ensure_authenticated()?;
        let venue = self.client.venue()?;
        let symbol = self.client.symbol()?;
        let resp = self.client.http.get_order(venue, symbol, id).await?;
        Ok(resp.into())
    }

    /// All orders of the configured account on the configured venue.
    pub async fn for_account(&self) -> Result<Vec<Order>, SdkError> {
        self.client.ensure_authenticated()?;
        let venue = self.client.venue()?;
        let account = self.client.account()?;
        let resp = self.client.http.get_account_orders(venue, account).await?;
        Ok(resp.orders.into_iter().map(Order::from).collect())
    }

    /// All orders of the configured account in the configured symbol.
    pub async fn for_stock(&self) -> Result<Vec<Order>, SdkError> {
        self.client.ensure_authenticated()?;
        let venue = self.client.venue()?;
        let account = self.client.account()?;
        let symbol = self.client.symbol()?;
        let resp = self
            .client
            .http
            .get_stock_orders(venue, account, symbol)
            .await?;
        Ok(resp.orders.into_iter().map(Order::from).collect())
    }
}
