//! Sentiment axis vocabulary and aggregation

use std::fmt;

/// Categorical rating for a single sentiment axis.
///
/// Two parallel vocabularies share this type: Bullish/Neutral/Bearish for
/// the News and X axes, Positive/Flat/Negative for ETF flows. The valence
/// mapping is total, so aggregation treats the vocabularies
/// interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRating {
    Bullish,
    Neutral,
    Bearish,
    Positive,
    Flat,
    Negative,
}

/// All six canonical ratings
pub const ALL_RATINGS: [AxisRating; 6] = [
    AxisRating::Bullish,
    AxisRating::Neutral,
    AxisRating::Bearish,
    AxisRating::Positive,
    AxisRating::Flat,
    AxisRating::Negative,
];

impl AxisRating {
    /// Signed contribution to the aggregate score
    pub const fn valence(self) -> i8 {
        match self {
            Self::Bullish | Self::Positive => 1,
            Self::Neutral | Self::Flat => 0,
            Self::Bearish | Self::Negative => -1,
        }
    }

    /// Canonical label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
            Self::Positive => "Positive",
            Self::Flat => "Flat",
            Self::Negative => "Negative",
        }
    }

    /// Label decorated with the marker for this rating's valence
    pub const fn decorated(self) -> &'static str {
        match self {
            Self::Bullish => "🟢 Bullish",
            Self::Neutral => "🟡 Neutral",
            Self::Bearish => "🔴 Bearish",
            Self::Positive => "🟢 Positive",
            Self::Flat => "🟡 Flat",
            Self::Negative => "🔴 Negative",
        }
    }

    /// Parse a canonical label.
    ///
    /// Unknown labels are `None`; callers treat that as neutral valence
    /// rather than an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Bullish" => Some(Self::Bullish),
            "Neutral" => Some(Self::Neutral),
            "Bearish" => Some(Self::Bearish),
            "Positive" => Some(Self::Positive),
            "Flat" => Some(Self::Flat),
            "Negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for AxisRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall three-bucket sentiment derived from the axis valences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallSentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl OverallSentiment {
    /// Canonical label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }

    /// Label decorated with the marker for this bucket
    pub const fn decorated(self) -> &'static str {
        match self {
            Self::Bullish => "🟢 Bullish",
            Self::Neutral => "🟡 Neutral",
            Self::Bearish => "🔴 Bearish",
        }
    }
}

impl fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a decorated display label back to its canonical form.
///
/// Inverse of [`AxisRating::decorated`] on its image; any other input is
/// returned unchanged.
pub fn resolve(display: &str) -> &str {
    match display {
        "🟢 Bullish" => "Bullish",
        "🟡 Neutral" => "Neutral",
        "🔴 Bearish" => "Bearish",
        "🟢 Positive" => "Positive",
        "🟡 Flat" => "Flat",
        "🔴 Negative" => "Negative",
        other => other,
    }
}

/// Combine the three axis ratings into the overall bucket.
///
/// Valence sum >= 2 is Bullish, <= -2 is Bearish, everything between is
/// Neutral. Total over all 27 combinations.
pub fn aggregate(news: AxisRating, social: AxisRating, etf: AxisRating) -> OverallSentiment {
    bucket(news.valence() + social.valence() + etf.valence())
}

/// Label-boundary variant of [`aggregate`].
///
/// Unrecognized labels contribute valence 0 instead of failing the
/// computation.
pub fn aggregate_labels(news: &str, social: &str, etf: &str) -> OverallSentiment {
    let valence = |label: &str| AxisRating::from_label(label).map_or(0, AxisRating::valence);
    bucket(valence(news) + valence(social) + valence(etf))
}

const fn bucket(sum: i8) -> OverallSentiment {
    if sum >= 2 {
        OverallSentiment::Bullish
    } else if sum <= -2 {
        OverallSentiment::Bearish
    } else {
        OverallSentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AxisRating::Bullish, AxisRating::Bullish, AxisRating::Positive => OverallSentiment::Bullish; "all positive is bullish")]
    #[test_case(AxisRating::Bearish, AxisRating::Bearish, AxisRating::Negative => OverallSentiment::Bearish; "all negative is bearish")]
    #[test_case(AxisRating::Bullish, AxisRating::Bearish, AxisRating::Flat => OverallSentiment::Neutral; "sum zero is neutral")]
    #[test_case(AxisRating::Bullish, AxisRating::Neutral, AxisRating::Positive => OverallSentiment::Bullish; "sum two is bullish")]
    #[test_case(AxisRating::Bearish, AxisRating::Neutral, AxisRating::Flat => OverallSentiment::Neutral; "sum minus one is neutral")]
    #[test_case(AxisRating::Bearish, AxisRating::Bearish, AxisRating::Flat => OverallSentiment::Bearish; "sum minus two is bearish")]
    fn aggregate_cases(news: AxisRating, social: AxisRating, etf: AxisRating) -> OverallSentiment {
        aggregate(news, social, etf)
    }

    #[test]
    fn aggregate_matches_threshold_rule_for_all_combinations() {
        for news in ALL_RATINGS {
            for social in ALL_RATINGS {
                for etf in ALL_RATINGS {
                    let sum = news.valence() + social.valence() + etf.valence();
                    let expected = if sum >= 2 {
                        OverallSentiment::Bullish
                    } else if sum <= -2 {
                        OverallSentiment::Bearish
                    } else {
                        OverallSentiment::Neutral
                    };
                    assert_eq!(
                        aggregate(news, social, etf),
                        expected,
                        "{news} + {social} + {etf}"
                    );
                }
            }
        }
    }

    #[test]
    fn decorate_then_resolve_is_identity() {
        for rating in ALL_RATINGS {
            assert_eq!(resolve(rating.decorated()), rating.label());
        }
    }

    #[test]
    fn resolve_passes_unknown_labels_through() {
        assert_eq!(resolve("Sideways"), "Sideways");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn unknown_labels_count_as_neutral_valence() {
        // One unknown among two bullish labels: 1 + 1 + 0 = 2.
        assert_eq!(
            aggregate_labels("Bullish", "Bullish", "Sideways"),
            OverallSentiment::Bullish
        );
        // All unknown: sum 0.
        assert_eq!(aggregate_labels("", "?", "whatever"), OverallSentiment::Neutral);
    }

    #[test]
    fn valence_mapping_is_fixed() {
        assert_eq!(AxisRating::Bullish.valence(), 1);
        assert_eq!(AxisRating::Positive.valence(), 1);
        assert_eq!(AxisRating::Neutral.valence(), 0);
        assert_eq!(AxisRating::Flat.valence(), 0);
        assert_eq!(AxisRating::Bearish.valence(), -1);
        assert_eq!(AxisRating::Negative.valence(), -1);
    }

    #[test]
    fn from_label_round_trips_canonical_labels() {
        for rating in ALL_RATINGS {
            assert_eq!(AxisRating::from_label(rating.label()), Some(rating));
        }
        assert_eq!(AxisRating::from_label("bullish"), None);
    }
}
