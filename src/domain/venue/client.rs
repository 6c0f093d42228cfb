//! Venues sub-client: heartbeats and the stock list.

use crate::client::StockfighterClient;
use crate::domain::venue::Stock;
use crate::error::SdkError;
use crate::shared::Venue;

pub struct Venues<'a> {
    pub(crate) client: &'a StockfighterClient,
}

impl<'a> Venues<'a> {
    /// Check that the API as a whole is up.
    pub async fn heartbeat(&self) -> Result<(), SdkError> {
        self.client.http.heartbeat().await?;
        Ok(())
    }

    /// `true` when [`heartbeat`](Self::heartbeat) succeeds.
    pub async fn is_up(&self) -> bool {
        match self.heartbeat().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "API heartbeat failed");
                false
            }
        }
    }

    /// Check that the configured venue is up. Returns the venue name it reported.
    pub async fn venue_heartbeat(&self) -> Result<Venue, SdkError> {
        let venue = self.client.venue()?;
        let resp = self.client.http.venue_heartbeat(venue).await?;
        Ok(resp.venue)
    }

    /// `true` when [`venue_heartbeat`](Self::venue_heartbeat) succeeds.
    pub async fn is_venue_up(&self) -> bool {
        match self.venue_heartbeat().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Venue heartbeat failed");
                false
            }
        }
    }

    /// Stocks available on the configured venue.
    pub async fn stocks(&self) -> Result<Vec<Stock>, SdkError> {
        let venue = self.client.venue()?;
        let resp = self.client.http.get_stocks(venue).await?;
        Ok(resp.symbols.into_iter().map(Stock::from).collect())
    }
}
