//! Canned provider response bodies
//!
//! Shapes mirror the real provider payloads, reduced to the fields the
//! adapters read plus enough surrounding structure to keep the parsers
//! honest.

use serde_json::{Value, json};

/// CoinGecko `/api/v3/coins/bitcoin` body with the given price and change
pub fn coingecko_body(price_usd: f64, change_24h: f64) -> Value {
    json!({
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "market_data": {
            "current_price": {
                "usd": price_usd,
                "eur": price_usd * 0.92
            },
            "price_change_percentage_24h": change_24h
        }
    })
}

/// CoinGecko body whose market data block is missing entirely
pub fn coingecko_body_without_market_data() -> Value {
    json!({
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin"
    })
}

/// CoinDesk `/v1/bpi/currentprice.json` body
pub fn coindesk_body(rate_float: f64) -> Value {
    json!({
        "time": { "updatedISO": "2026-08-06T00:00:00+00:00" },
        "chartName": "Bitcoin",
        "bpi": {
            "USD": {
                "code": "USD",
                "rate": "67,123.4500",
                "rate_float": rate_float
            },
            "EUR": {
                "code": "EUR",
                "rate": "61,753.5700",
                "rate_float": rate_float * 0.92
            }
        }
    })
}

/// LunarCrush assets body carrying a galaxy score
pub fn lunarcrush_body(galaxy_score: f64) -> Value {
    json!({
        "config": { "data": "assets", "symbol": "BTC" },
        "data": [
            {
                "symbol": "BTC",
                "name": "Bitcoin",
                "galaxy_score": galaxy_score
            }
        ]
    })
}

/// LunarCrush body with an asset entry but no score field
pub fn lunarcrush_body_without_score() -> Value {
    json!({
        "config": { "data": "assets", "symbol": "BTC" },
        "data": [
            { "symbol": "BTC", "name": "Bitcoin" }
        ]
    })
}
