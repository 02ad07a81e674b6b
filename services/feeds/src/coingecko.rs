//! CoinGecko market-data adapter
//!
//! Supplies both the current USD price and the 24h percentage change.

use crate::{MarketDataProvider, USER_AGENT};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;
use tracker_common::{FeedError, PriceQuote};

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// CoinGecko provider
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider pointed at the public CoinGecko API
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
        let url = format!(
            "{}/api/v3/coins/bitcoin?localization=false&tickers=false&market_data=true",
            self.base_url
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: CoinsResponse = response.json().await?;

        let market = body
            .market_data
            .ok_or_else(|| FeedError::MalformedResponse {
                endpoint: url.clone(),
                details: "missing 'market_data' block".to_string(),
            })?;

        let amount_usd = market.current_price.get("usd").copied();
        if amount_usd.is_none() {
            return Err(FeedError::MalformedResponse {
                endpoint: url,
                details: "missing 'usd' price".to_string(),
            });
        }

        Ok(PriceQuote {
            amount_usd,
            change_24h_percent: market.price_change_percentage_24h,
        })
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch_price(&self) -> PriceQuote {
        match self.try_fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("CoinGecko price fetch failed: {}", e);
                PriceQuote::unavailable()
            }
        }
    }
}

/// CoinGecko /coins/bitcoin response, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct CoinsResponse {
    market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
struct MarketData {
    #[serde(default)]
    current_price: HashMap<String, f64>,
    price_change_percentage_24h: Option<f64>,
}
