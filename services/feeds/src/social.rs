//! Social-analytics adapter
//!
//! Fetches a composite social-sentiment score for Bitcoin (the LunarCrush
//! galaxy score). The API key comes from injected configuration; when it is
//! absent the fetch short-circuits to Unavailable without touching the
//! network.

use crate::USER_AGENT;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use tracker_common::{FeedError, SocialScore, TrackerConfig};

const DEFAULT_BASE_URL: &str = "https://api.lunarcrush.com";

/// Composite social-score provider
pub struct SocialScoreProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SocialScoreProvider {
    /// Create a provider pointed at the public API, keyed from `config`
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, config.social_api_key.clone())
    }

    /// Create a provider pointed at a different endpoint (tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .context("Failed to create HTTP client")?,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Fetch the composite score.
    ///
    /// Infallible by contract: a missing key or any fetch failure degrades
    /// to [`SocialScore::unavailable`].
    pub async fn fetch_score(&self) -> SocialScore {
        match self.try_fetch().await {
            Ok(score) => score,
            Err(e) => {
                warn!("Social score fetch failed: {}", e);
                SocialScore::unavailable()
            }
        }
    }

    async fn try_fetch(&self) -> Result<SocialScore, FeedError> {
        let key = self.api_key.as_deref().ok_or(FeedError::MissingApiKey)?;
        let url = format!("{}/v2", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("data", "assets"), ("key", key), ("symbol", "BTC")])
            .send()
            .await?
            .error_for_status()?;
        let body: AssetsResponse = response.json().await?;

        let score = body
            .data
            .first()
            .and_then(|asset| asset.galaxy_score)
            .ok_or_else(|| FeedError::MalformedResponse {
                endpoint: url,
                details: "missing 'galaxy_score'".to_string(),
            })?;

        Ok(SocialScore { score: Some(score) })
    }
}

/// LunarCrush assets response, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct AssetsResponse {
    #[serde(default)]
    data: Vec<AssetData>,
}

#[derive(Debug, Deserialize)]
struct AssetData {
    galaxy_score: Option<f64>,
}
