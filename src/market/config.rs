use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const COINGECKO_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Market-data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Minimum spacing between two requests (~50 requests/min by default).
    pub min_request_interval_ms: u64,
    pub currency: String,
    pub top_coin_limit: u32,
    pub history_days: u32,
}

impl Default for MarketClientConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_BASE_URL.to_owned(),
            timeout_ms: 15_000,
            min_request_interval_ms: 1_200,
            currency: "usd".to_owned(),
            top_coin_limit: 50,
            history_days: 7,
        }
    }
}

impl MarketClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "market base url must not be empty".to_owned(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ChartError::InvalidData(
                "market timeout must be > 0".to_owned(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "market currency must not be empty".to_owned(),
            ));
        }
        if self.top_coin_limit == 0 || self.history_days == 0 {
            return Err(ChartError::InvalidData(
                "coin limit and history days must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse market config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Time still to wait before the next request may be sent.
#[must_use]
pub fn rate_limit_delay(since_last_request: Option<Duration>, interval: Duration) -> Duration {
    match since_last_request {
        Some(elapsed) => interval.saturating_sub(elapsed),
        None => Duration::ZERO,
    }
}
