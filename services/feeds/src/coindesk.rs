//! CoinDesk market-data adapter
//!
//! Price-only source: the BPI endpoint carries no 24h change, so the
//! quote's change field stays absent.

use crate::{MarketDataProvider, USER_AGENT};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use tracker_common::{FeedError, PriceQuote};

const DEFAULT_BASE_URL: &str = "https://api.coindesk.com";

/// CoinDesk BPI provider
pub struct CoinDeskProvider {
    client: Client,
    base_url: String,
}

impl CoinDeskProvider {
    /// Create a provider pointed at the public CoinDesk API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider pointed at a different endpoint (tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .context("Failed to create HTTP client")?,
            base_url: base_url.into(),
        })
    }

    async fn try_fetch(&self) -> Result<PriceQuote, FeedError> {
        let url = format!("{}/v1/bpi/currentprice.json", self.base_url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: CurrentPriceResponse = response.json().await?;

        let usd = body.bpi.usd.ok_or_else(|| FeedError::MalformedResponse {
            endpoint: url,
            details: "missing 'bpi.USD' block".to_string(),
        })?;

        Ok(PriceQuote {
            amount_usd: Some(usd.rate_float),
            change_24h_percent: None,
        })
    }
}

#[async_trait]
impl MarketDataProvider for CoinDeskProvider {
    fn name(&self) -> &'static str {
        "coindesk"
    }

    async fn fetch_price(&self) -> PriceQuote {
        match self.try_fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("CoinDesk price fetch failed: {}", e);
                PriceQuote::unavailable()
            }
        }
    }
}

/// CoinDesk /v1/bpi/currentprice.json response
#[derive(Debug, Deserialize)]
struct CurrentPriceResponse {
    bpi: Bpi,
}

#[derive(Debug, Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: Option<BpiQuote>,
}

#[derive(Debug, Deserialize)]
struct BpiQuote {
    rate_float: f64,
}
