//! Bitcoin Sentiment Tracker terminal shell
//!
//! Collects the three axis ratings and optional notes, fetches market and
//! social data, renders the snapshot document, and optionally writes it to
//! disk.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use feeds::{CoinDeskProvider, CoinGeckoProvider, MarketDataProvider, SocialScoreProvider};
use sentiment_tracker::{AxisRating, Snapshot};
use std::path::PathBuf;
use tracing::info;
use tracker_common::{PriceQuote, SocialScore, TrackerConfig};

#[derive(Parser)]
#[command(name = "btc-sentiment")]
#[command(about = "Bitcoin Sentiment Tracker - single-session market dashboard")]
#[command(version)]
struct Cli {
    /// News sentiment rating
    #[arg(long, value_enum, default_value = "neutral")]
    news: MarketMood,

    /// X (fka Twitter) sentiment rating
    #[arg(long = "x", value_enum, default_value = "neutral")]
    x_sentiment: MarketMood,

    /// ETF flow rating
    #[arg(long, value_enum, default_value = "flat")]
    etf: FlowMood,

    /// Custom summary or notes for the snapshot
    #[arg(long, default_value = "")]
    notes: String,

    /// Market data provider
    #[arg(long, value_enum, default_value = "coingecko")]
    provider: ProviderKind,

    /// Directory to write the snapshot file into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the network; both feeds render Unavailable
    #[arg(long)]
    no_fetch: bool,
}

/// Bullish/Neutral/Bearish vocabulary (News and X axes)
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarketMood {
    Bullish,
    Neutral,
    Bearish,
}

/// Positive/Flat/Negative vocabulary (ETF flow axis)
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlowMood {
    Positive,
    Flat,
    Negative,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderKind {
    Coingecko,
    Coindesk,
}

impl From<MarketMood> for AxisRating {
    fn from(mood: MarketMood) -> Self {
        match mood {
            MarketMood::Bullish => Self::Bullish,
            MarketMood::Neutral => Self::Neutral,
            MarketMood::Bearish => Self::Bearish,
        }
    }
}

impl From<FlowMood> for AxisRating {
    fn from(mood: FlowMood) -> Self {
        match mood {
            FlowMood::Positive => Self::Positive,
            FlowMood::Flat => Self::Flat,
            FlowMood::Negative => Self::Negative,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentiment_tracker=info,feeds=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = TrackerConfig::from_env();

    let (price, social) = if cli.no_fetch {
        (PriceQuote::unavailable(), SocialScore::unavailable())
    } else {
        fetch_feeds(cli.provider, &config).await?
    };

    let snapshot = Snapshot::new(
        Local::now().date_naive(),
        price,
        social,
        cli.news.into(),
        cli.x_sentiment.into(),
        cli.etf.into(),
        cli.notes,
    );

    render_dashboard(&snapshot);

    if let Some(dir) = cli.out {
        let path = dir.join(snapshot.file_name());
        std::fs::write(&path, snapshot.render())
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(())
}

async fn fetch_feeds(
    kind: ProviderKind,
    config: &TrackerConfig,
) -> Result<(PriceQuote, SocialScore)> {
    let provider: Box<dyn MarketDataProvider> = match kind {
        ProviderKind::Coingecko => Box::new(CoinGeckoProvider::new()?),
        ProviderKind::Coindesk => Box::new(CoinDeskProvider::new()?),
    };
    let social = SocialScoreProvider::new(config)?;

    info!("Fetching market data from {}", provider.name());
    Ok(tokio::join!(provider.fetch_price(), social.fetch_score()))
}

fn render_dashboard(snapshot: &Snapshot) {
    println!();
    println!("{}", "Bitcoin Sentiment Tracker".bold());
    println!("{}", format!("Date: {}", snapshot.formatted_date()).dimmed());
    println!();
    println!("{}", "Generated Snapshot".underline());
    println!();
    println!("{}", snapshot.render());
}
