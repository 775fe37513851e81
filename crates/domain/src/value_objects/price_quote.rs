use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage changes reported by the price source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    #[serde(default)]
    pub h1: Option<f64>,
    #[serde(default)]
    pub h6: Option<f64>,
    #[serde(default)]
    pub h24: Option<f64>,
}

/// Where a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    DexScreener,
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DexScreener => write!(f, "dexscreener"),
        }
    }
}

/// A guarded USD quote for the paired token.
///
/// All three prices are finite and positive. A quote is never mutated once
/// built; a refresh produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub spot_price_usd: f64,
    pub twap_price_usd: f64,
    /// Price to derive ticks from.
    pub used_price_usd: f64,
    pub fetched_at: DateTime<Utc>,
    pub source: QuoteSource,
    pub price_change: Option<PriceChange>,
}
