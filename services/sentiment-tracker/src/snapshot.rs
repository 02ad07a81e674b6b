//! Canonical snapshot document
//!
//! One render's complete state and its fixed-structure text rendering. The
//! rendered string is the single source of truth: the same bytes are shown
//! on screen and written to disk.

use crate::axis::{AxisRating, OverallSentiment, aggregate};
use chrono::NaiveDate;
use tracker_common::{PriceQuote, SocialScore};

/// Placeholder for any external numeric value that could not be obtained
pub const UNAVAILABLE: &str = "Unavailable";

/// Fallback summary used when the user supplied no notes
pub const DEFAULT_SUMMARY: &str = "Sentiment is mixed today. No major moves in ETF flows or \
     headlines, while social media sentiment remains divided.";

/// A single render's state, ready to be formatted
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub price: PriceQuote,
    pub social: SocialScore,
    pub news: AxisRating,
    pub x: AxisRating,
    pub etf: AxisRating,
    pub notes: String,
}

impl Snapshot {
    /// Assemble a snapshot for one render
    pub fn new(
        date: NaiveDate,
        price: PriceQuote,
        social: SocialScore,
        news: AxisRating,
        x: AxisRating,
        etf: AxisRating,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date,
            price,
            social,
            news,
            x,
            etf,
            notes: notes.into(),
        }
    }

    /// Overall sentiment, recomputed from the three axes on every call
    pub fn overall(&self) -> OverallSentiment {
        aggregate(self.news, self.x, self.etf)
    }

    /// Human-readable date as it appears in the document
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }

    /// Download filename for the snapshot.
    ///
    /// The date stem is sanitized for filesystems: spaces become
    /// underscores, commas are dropped.
    pub fn file_name(&self) -> String {
        let stem = self
            .formatted_date()
            .replace(", ", "_")
            .replace(' ', "_")
            .replace(',', "");
        format!("btc_sentiment_snapshot_{stem}.txt")
    }

    /// Render the canonical document.
    ///
    /// Deterministic: identical inputs yield byte-identical output.
    pub fn render(&self) -> String {
        let notes = self.notes.trim();
        let summary = if notes.is_empty() {
            DEFAULT_SUMMARY
        } else {
            notes
        };

        format!(
            "Date: {date}\n\
             Bitcoin Price: {price}\n\
             Social Sentiment Score: {social}\n\
             Bitcoin Sentiment: {overall}\n\
             \n\
             News Sentiment: {news}\n\
             X (fka Twitter) Sentiment: {x}\n\
             ETF Flow Sentiment: {etf}\n\
             \n\
             Summary:\n\
             {summary}\n",
            date = self.formatted_date(),
            price = price_line(&self.price),
            social = social_line(&self.social),
            overall = self.overall().decorated(),
            news = self.news.label(),
            x = self.x.label(),
            etf = self.etf.label(),
        )
    }
}

fn price_line(quote: &PriceQuote) -> String {
    match (quote.amount_usd, quote.change_24h_percent) {
        (Some(amount), Some(change)) => format!("${} ({:+.2}%)", fmt_usd(amount), change),
        (Some(amount), None) => format!("${}", fmt_usd(amount)),
        (None, _) => UNAVAILABLE.to_string(),
    }
}

fn social_line(score: &SocialScore) -> String {
    match score.score {
        Some(value) => format!("{}/100", fmt_score(value)),
        None => UNAVAILABLE.to_string(),
    }
}

/// Format a USD amount with thousands separators and exactly two decimals
fn fmt_usd(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Scores print without decimals when integral, else with up to two
fn fmt_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
