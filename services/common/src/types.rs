//! Market data value types
//!
//! Every externally sourced numeric is optional: an absent value means the
//! fetch failed or the source does not carry the field. Both types are
//! created once per render and immutable afterwards.

use serde::{Deserialize, Serialize};

/// Current Bitcoin market price in USD, with an optional 24h change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Last price in USD; `None` when the fetch failed
    pub amount_usd: Option<f64>,
    /// 24-hour percentage change; may be `None` even when a price is
    /// present (not all sources provide it)
    pub change_24h_percent: Option<f64>,
}

impl PriceQuote {
    /// The degraded fetch result: both fields absent
    pub const fn unavailable() -> Self {
        Self {
            amount_usd: None,
            change_24h_percent: None,
        }
    }

    /// True when no price could be obtained
    pub const fn is_unavailable(&self) -> bool {
        self.amount_usd.is_none()
    }
}

/// Composite social-sentiment index
///
/// Producers emit values in [0, 100]; the range is not enforced here, the
/// score is an opaque magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialScore {
    /// The composite score; `None` when the fetch failed
    pub score: Option<f64>,
}

impl SocialScore {
    /// The degraded fetch result
    pub const fn unavailable() -> Self {
        Self { score: None }
    }

    /// True when no score could be obtained
    pub const fn is_unavailable(&self) -> bool {
        self.score.is_none()
    }
}
