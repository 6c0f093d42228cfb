//! Feed descriptors: which stream to open and where it lives.
//!
//! Stockfighter has no subscribe messages: each feed is its own WebSocket
//! endpoint, selected entirely by URL.

use crate::shared::{Account, Symbol, Venue};

/// The kind of stream a feed carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Quote updates (`tickertape`).
    Tickertape,
    /// Fills on the account's orders (`executions`).
    Executions,
}

impl FeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Tickertape => "tickertape",
            FeedKind::Executions => "executions",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A streaming feed for one account on one venue, optionally narrowed to a stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feed {
    pub kind: FeedKind,
    pub account: Account,
    pub venue: Venue,
    pub symbol: Option<Symbol>,
}

impl Feed {
    pub fn tickertape(account: impl Into<Account>, venue: impl Into<Venue>) -> Self {
        Self {
            kind: FeedKind::Tickertape,
            account: account.into(),
            venue: venue.into(),
            symbol: None,
        }
    }

    pub fn tickertape_for_stock(
        account: impl Into<Account>,
        venue: impl Into<Venue>,
        symbol: impl Into<Symbol>,
    ) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::tickertape(account, venue)
        }
    }

    pub fn executions(account: impl Into<Account>, venue: impl Into<Venue>) -> Self {
        Self {
            kind: FeedKind::Executions,
            account: account.into(),
            venue: venue.into(),
            symbol: None,
        }
    }

    pub fn executions_for_stock(
        account: impl Into<Account>,
        venue: impl Into<Venue>,
        symbol: impl Into<Symbol>,
    ) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::executions(account, venue)
        }
    }

    /// Full endpoint URL under the given WebSocket base.
    ///
    /// `{base}/{account}/venues/{venue}/{kind}[/stocks/{symbol}]`
    pub fn url(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/venues/{}/{}",
            base.trim_end_matches('/'),
            self.account.path_segment(),
            self.venue.path_segment(),
            self.kind
        );
        if let Some(symbol) = &self.symbol {
            url.push_str("/stocks/");
            url.push_str(&symbol.path_segment());
        }
        url
    }
}
