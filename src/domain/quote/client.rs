//! Quotes sub-client.

use crate::client::StockfighterClient;
use crate::domain::quote::Quote;
use crate::error::SdkError;

pub struct Quotes<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Quotes<'a> {
    /// Latest quote for the configured venue and symbol.
    pub async fn get(&self) -> Result<Quote, SdkError> {
        let venue = self.client.venue()?;
        let symbol = self.client.symbol()?;
        let resp = self.client.http.get_quote(venue, symbol).await?;
        Ok(resp.into())
    }
}
