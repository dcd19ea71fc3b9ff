use std::thread;
use std::time::Instant;

use tracing::{debug, warn};

use crate::core::PriceHistory;
use crate::error::{ChartError, ChartResult};

use super::coin::{CoinSummary, parse_markets_json};
use super::config::{MarketClientConfig, rate_limit_delay};
use super::history::parse_market_chart_json;

/// Blocking CoinGecko client.
///
/// Requests are spaced by `min_request_interval`; callers on a UI thread
/// should run it on a worker and hand results back.
pub struct CoinGeckoClient {
    config: MarketClientConfig,
    http: reqwest::blocking::Client,
    last_request: Option<Instant>,
}

impl CoinGeckoClient {
    pub fn new(config: MarketClientConfig) -> ChartResult<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ChartError::SourceUnavailable(format!("http client error: {e}")))?;
        Ok(Self {
            config,
            http,
            last_request: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MarketClientConfig {
        &self.config
    }

    /// Top coins by market cap, ranked.
    pub fn get_top_coins(&mut self, limit: u32) -> ChartResult<Vec<CoinSummary>> {
        let per_page = limit.to_string();
        let url = format!("{}/coins/markets", self.config.base_url);
        let body = self.fetch(
            &url,
            &[
                ("vs_currency", self.config.currency.clone()),
                ("order", "market_cap_desc".to_owned()),
                ("per_page", per_page),
                ("page", "1".to_owned()),
                ("sparkline", "false".to_owned()),
            ],
        )?;
        let coins = parse_markets_json(&body)?;
        debug!(count = coins.len(), "fetched top coins");
        Ok(coins)
    }

    /// Daily closing prices over the configured number of days.
    pub fn get_history(&mut self, coin_id: &str) -> ChartResult<PriceHistory> {
        if coin_id.trim().is_empty() {
            return Err(ChartError::InvalidData("coin id must not be empty".to_owned()));
        }
        let url = format!("{}/coins/{coin_id}/market_chart", self.config.base_url);
        let body = self.fetch(
            &url,
            &[
                ("vs_currency", self.config.currency.clone()),
                ("days", self.config.history_days.to_string()),
                ("interval", "daily".to_owned()),
            ],
        )?;
        let history = parse_market_chart_json(&body)?;
        debug!(coin = coin_id, samples = history.len(), "fetched coin history");
        Ok(history)
    }

    pub fn get_top_coins_or_none(&mut self, limit: u32) -> Option<Vec<CoinSummary>> {
        self.get_top_coins(limit)
            .inspect_err(|err| warn!(error = %err, "failed to fetch top coins"))
            .ok()
    }

    pub fn get_history_or_none(&mut self, coin_id: &str) -> Option<PriceHistory> {
        self.get_history(coin_id)
            .inspect_err(|err| warn!(coin = coin_id, error = %err, "failed to fetch history"))
            .ok()
    }

    fn fetch(&mut self, url: &str, query: &[(&str, String)]) -> ChartResult<String> {
        self.wait_for_rate_limit();
        self.http
            .get(url)
            .query(query)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| ChartError::SourceUnavailable(format!("request to {url} failed: {e}")))
    }

    fn wait_for_rate_limit(&mut self) {
        let delay = rate_limit_delay(
            self.last_request.map(|at| at.elapsed()),
            self.config.min_request_interval(),
        );
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "rate limiting request");
            thread::sleep(delay);
        }
        self.last_request = Some(Instant::now());
    }
}
