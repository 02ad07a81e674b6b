//! External data feeds for the sentiment tracker
//!
//! Adapters for the market-data and social-analytics providers. Every
//! public fetch is a single best-effort attempt with the transport-default
//! timeout: any failure is logged and collapses to an all-absent value,
//! never an error for the caller.

use async_trait::async_trait;
use tracker_common::PriceQuote;

pub mod coindesk;
pub mod coingecko;
pub mod social;

pub use coindesk::CoinDeskProvider;
pub use coingecko::CoinGeckoProvider;
pub use social::SocialScoreProvider;

/// User agent sent with every provider request
pub(crate) const USER_AGENT: &str = "btc-sentiment-tracker/0.1";

/// A market-data source able to produce the current Bitcoin price
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider id, e.g. "coingecko"
    fn name(&self) -> &'static str;

    /// Fetch the current price.
    ///
    /// Infallible by contract: any network error, non-success status, or
    /// malformed payload degrades to [`PriceQuote::unavailable`].
    async fn fetch_price(&self) -> PriceQuote;
}
