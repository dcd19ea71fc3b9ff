use chrono::DateTime;
use serde::Deserialize;

use crate::core::PriceHistory;
use crate::error::{ChartError, ChartResult};

/// Axis label format for history samples, e.g. `Jan 05`.
pub const HISTORY_LABEL_FORMAT: &str = "%b %d";

#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

/// Parses a `/coins/{id}/market_chart` response into a chart history.
///
/// Each `[epoch_ms, price]` pair becomes one sample labelled with
/// [`HISTORY_LABEL_FORMAT`] in UTC.
pub fn parse_market_chart_json(body: &str) -> ChartResult<PriceHistory> {
    let response: MarketChartResponse = serde_json::from_str(body).map_err(|e| {
        ChartError::SourceUnavailable(format!("failed to decode market chart response: {e}"))
    })?;

    let mut timestamps = Vec::with_capacity(response.prices.len());
    let mut prices = Vec::with_capacity(response.prices.len());
    for (epoch_ms, price) in response.prices {
        timestamps.push(format_sample_time(epoch_ms)?);
        prices.push(price);
    }
    PriceHistory::new(timestamps, prices)
}

fn format_sample_time(epoch_ms: f64) -> ChartResult<String> {
    if !epoch_ms.is_finite() {
        return Err(ChartError::InvalidData(
            "sample timestamp must be finite".to_owned(),
        ));
    }
    let time = DateTime::from_timestamp_millis(epoch_ms as i64).ok_or_else(|| {
        ChartError::InvalidData(format!("sample timestamp out of range: {epoch_ms}"))
    })?;
    Ok(time.format(HISTORY_LABEL_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_samples_by_day() {
        // 2024-01-01T00:00:00Z and 2024-01-02T00:00:00Z
        let body = r#"{"prices":[[1704067200000,100.5],[1704153600000,101.0]]}"#;
        let history = parse_market_chart_json(body).expect("parse");
        assert_eq!(history.timestamps(), ["Jan 01", "Jan 02"]);
        assert_eq!(history.prices(), [100.5, 101.0]);
    }

    #[test]
    fn empty_price_list_is_invalid() {
        let err = parse_market_chart_json(r#"{"prices":[]}"#).expect_err("empty");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
