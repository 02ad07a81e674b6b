//! End-to-end document rendering through the public API

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sentiment_tracker::{AxisRating, OverallSentiment, Snapshot, aggregate};
use tracker_common::{PriceQuote, SocialScore};

#[test]
fn fully_degraded_render_still_produces_a_complete_document() {
    let snapshot = Snapshot::new(
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date"),
        PriceQuote::unavailable(),
        SocialScore::unavailable(),
        AxisRating::Bearish,
        AxisRating::Bearish,
        AxisRating::Negative,
        "",
    );

    assert_eq!(aggregate(snapshot.news, snapshot.x, snapshot.etf), OverallSentiment::Bearish);
    assert_eq!(
        snapshot.render(),
        "Date: August 06, 2026\n\
         Bitcoin Price: Unavailable\n\
         Social Sentiment Score: Unavailable\n\
         Bitcoin Sentiment: 🔴 Bearish\n\
         \n\
         News Sentiment: Bearish\n\
         X (fka Twitter) Sentiment: Bearish\n\
         ETF Flow Sentiment: Negative\n\
         \n\
         Summary:\n\
         Sentiment is mixed today. No major moves in ETF flows or headlines, \
         while social media sentiment remains divided.\n"
    );
}

#[test]
fn snapshot_file_contents_match_the_displayed_document() {
    let snapshot = Snapshot::new(
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date"),
        PriceQuote {
            amount_usd: Some(67_123.45),
            change_24h_percent: Some(1.32),
        },
        SocialScore { score: Some(71.5) },
        AxisRating::Bullish,
        AxisRating::Bullish,
        AxisRating::Flat,
        "Spot ETF inflows picked up after the halving chatter.",
    );

    // The same render feeds both the terminal and the download: one call,
    // two consumers, byte-identical by construction.
    let displayed = snapshot.render();
    let downloaded = snapshot.render();

    assert_eq!(displayed, downloaded);
    assert_eq!(snapshot.file_name(), "btc_sentiment_snapshot_August_06_2026.txt");
    assert!(displayed.contains("Bitcoin Price: $67,123.45 (+1.32%)"));
    assert!(displayed.contains("Social Sentiment Score: 71.5/100"));
    assert!(displayed.ends_with("Summary:\nSpot ETF inflows picked up after the halving chatter.\n"));
}
