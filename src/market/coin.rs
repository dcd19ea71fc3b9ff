use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One row of the ranked market table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    /// CoinGecko identifier used for history lookups (e.g. `bitcoin`).
    pub id: String,
    pub rank: u32,
    pub name: String,
    /// Upper-cased ticker.
    pub symbol: String,
    pub price: f64,
    pub change_24h: Option<f64>,
    pub market_cap: f64,
}

impl CoinSummary {
    /// `"Bitcoin (BTC)"`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// Shape of one entry of the `/coins/markets` response. Every field may be
/// missing or null.
#[derive(Debug, Deserialize)]
struct MarketsEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    market_cap_rank: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    market_cap: Option<f64>,
}

impl From<MarketsEntry> for CoinSummary {
    fn from(entry: MarketsEntry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            rank: entry.market_cap_rank.unwrap_or(0),
            name: entry.name.unwrap_or_else(|| "N/A".to_owned()),
            symbol: entry.symbol.unwrap_or_default().to_uppercase(),
            price: entry.current_price.unwrap_or(0.0),
            change_24h: entry.price_change_percentage_24h,
            market_cap: entry.market_cap.unwrap_or(0.0),
        }
    }
}

/// Parses a `/coins/markets` response body.
pub fn parse_markets_json(body: &str) -> ChartResult<Vec<CoinSummary>> {
    let entries: Vec<MarketsEntry> = serde_json::from_str(body).map_err(|e| {
        ChartError::SourceUnavailable(format!("failed to decode markets response: {e}"))
    })?;
    Ok(entries.into_iter().map(CoinSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markets_entry_defaults_missing_fields() {
        let coins = parse_markets_json(r#"[{"id":"x","symbol":"abc"}]"#).expect("parse");
        assert_eq!(coins[0].rank, 0);
        assert_eq!(coins[0].name, "N/A");
        assert_eq!(coins[0].symbol, "ABC");
        assert_eq!(coins[0].change_24h, None);
    }
}
