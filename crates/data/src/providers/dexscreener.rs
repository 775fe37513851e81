//! DexScreener price provider.

use crate::PriceOracle;
use crate::transport::{HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use chrono::Utc;
use launchpad_domain::math::{VolatilityGuard, apply_volatility_guard, approximate_twap};
use launchpad_domain::value_objects::{PriceChange, PriceQuote, QuoteSource};
use launchpad_domain::{LaunchError, Result};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Paired-token pool on Base.
pub const DEFAULT_PAIR_URL: &str = "https://api.dexscreener.com/latest/dex/pairs/base/0xe155c517c53f078f4b443c99436e42c1b80fd2fb1b3508f431c46b8365e4f3f0";

/// Configuration for the DexScreener oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    /// Pair endpoint.
    pub url: String,
    /// Bound on a single fetch.
    pub timeout: Duration,
    /// Maximum age of a cached quote that is still served.
    pub cache_ttl: Duration,
    /// Thresholds applied to every fresh quote.
    pub volatility_guard: VolatilityGuard,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PAIR_URL.to_string(),
            timeout: Duration::from_millis(5_000),
            cache_ttl: Duration::from_millis(30_000),
            volatility_guard: VolatilityGuard::default(),
        }
    }
}

/// A pair as reported by DexScreener.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexScreenerPair {
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub price_native: Option<String>,
    #[serde(default)]
    pub price_change: Option<PriceChange>,
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub pair_created_at: Option<u64>,
}

/// Top-level response of the pairs endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexScreenerResponse {
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub pairs: Option<Vec<DexScreenerPair>>,
    #[serde(default)]
    pub pair: Option<DexScreenerPair>,
}

impl DexScreenerResponse {
    /// The singular pair, or else the first listed one.
    pub fn into_pair(self) -> Option<DexScreenerPair> {
        self.pair
            .or_else(|| self.pairs.and_then(|pairs| pairs.into_iter().next()))
    }
}

#[derive(Debug, Clone)]
struct CachedQuote {
    quote: Arc<PriceQuote>,
    stored_at: Instant,
}

/// Price oracle backed by the DexScreener pairs API.
///
/// Holds a single cached quote. Concurrent refreshes are not deduplicated;
/// the last successful one wins. A failed refresh leaves the cache untouched.
pub struct DexScreenerOracle<T = ReqwestTransport> {
    config: OracleConfig,
    transport: T,
    cache: RwLock<Option<CachedQuote>>,
}

impl DexScreenerOracle<ReqwestTransport> {
    /// Creates an oracle using a default `reqwest` client.
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] for an invalid volatility guard.
    pub fn new(config: OracleConfig) -> Result<Self> {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T: HttpTransport> DexScreenerOracle<T> {
    /// Creates an oracle with a custom transport.
    ///
    /// # Errors
    /// Returns [`LaunchError::Validation`] for an invalid volatility guard.
    pub fn with_transport(config: OracleConfig, transport: T) -> Result<Self> {
        config.volatility_guard.validate()?;
        Ok(Self {
            config,
            transport,
            cache: RwLock::new(None),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Returns the cached quote regardless of its age.
    pub async fn cached_quote(&self) -> Option<Arc<PriceQuote>> {
        self.cache.read().await.as_ref().map(|c| c.quote.clone())
    }

    async fn fresh_cached_quote(&self) -> Option<Arc<PriceQuote>> {
        let cache = self.cache.read().await;
        let cached = cache.as_ref()?;
        let age = cached.stored_at.elapsed();
        if age <= self.config.cache_ttl {
            debug!(age_ms = age.as_millis() as u64, "Serving cached quote");
            Some(cached.quote.clone())
        } else {
            None
        }
    }

    async fn fetch_latest_pair(&self) -> Result<DexScreenerPair> {
        let timeout_ms = self.config.timeout.as_millis() as u64;
        let response = tokio::time::timeout(self.config.timeout, self.transport.get(&self.config.url))
            .await
            .map_err(|_| {
                warn!(timeout_ms, url = %self.config.url, "Price request timed out");
                LaunchError::Timeout { timeout_ms }
            })??;

        if !response.is_success() {
            return Err(LaunchError::HttpStatus {
                status: response.status,
                reason: response.reason,
            });
        }

        let body: DexScreenerResponse = serde_json::from_str(&response.body)
            .map_err(|e| LaunchError::DataSource(format!("invalid JSON: {e}")))?;

        body.into_pair().ok_or_else(|| {
            LaunchError::DataSource("response did not include a pair".to_string())
        })
    }

    fn extract_usd_price(pair: &DexScreenerPair) -> Result<f64> {
        let raw = pair.price_usd.as_deref().unwrap_or_default().trim();
        match raw.parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
            _ => Err(LaunchError::InvalidPrice(format!(
                "price source returned an invalid USD price '{raw}'"
            ))),
        }
    }

    async fn refresh(&self) -> Result<Arc<PriceQuote>> {
        let pair = self.fetch_latest_pair().await?;
        let spot = Self::extract_usd_price(&pair)?;
        let change = pair.price_change.unwrap_or_default();

        let guard = &self.config.volatility_guard;
        let twap = approximate_twap(spot, change.h6, guard.twap_spot_weight);
        if !twap.is_finite() || twap <= 0.0 {
            warn!(spot = spot, twap = twap, "Rejecting quote with unusable TWAP");
            return Err(LaunchError::InvalidPrice(format!(
                "derived TWAP {twap} is not a positive finite price"
            )));
        }
        let used = apply_volatility_guard(spot, twap, change.h1, guard)?;

        let quote = Arc::new(PriceQuote {
            spot_price_usd: spot,
            twap_price_usd: twap,
            used_price_usd: used,
            fetched_at: Utc::now(),
            source: QuoteSource::DexScreener,
            price_change: pair.price_change,
        });

        info!(
            spot = spot,
            twap = twap,
            used = used,
            "Fetched paired token quote"
        );

        *self.cache.write().await = Some(CachedQuote {
            quote: quote.clone(),
            stored_at: Instant::now(),
        });
        Ok(quote)
    }
}

#[async_trait]
impl<T: HttpTransport> PriceOracle for DexScreenerOracle<T> {
    async fn get_quote(&self, force_refresh: bool) -> Result<Arc<PriceQuote>> {
        if !force_refresh && let Some(quote) = self.fresh_cached_quote().await {
            return Ok(quote);
        }
        self.refresh().await
    }
}
