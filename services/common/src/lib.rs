//! Shared types, errors, and configuration for the sentiment tracker

pub mod config;
pub mod errors;
pub mod types;

pub use config::TrackerConfig;
pub use errors::FeedError;
pub use types::{PriceQuote, SocialScore};
