use std::time::Duration;

use coin_chart::ChartError;
use coin_chart::market::{
    COINGECKO_API_BASE_URL, MarketClientConfig, parse_market_chart_json, parse_markets_json,
    rate_limit_delay,
};

const MARKETS_BODY: &str = r#"[
  {
    "id": "bitcoin",
    "symbol": "btc",
    "name": "Bitcoin",
    "current_price": 64123.5,
    "market_cap": 1262000000000,
    "market_cap_rank": 1,
    "price_change_percentage_24h": -1.25,
    "total_volume": 31000000000
  },
  {
    "id": "tether",
    "symbol": "usdt",
    "name": "Tether",
    "current_price": 1.0,
    "market_cap": 110000000000,
    "market_cap_rank": 3,
    "price_change_percentage_24h": null
  }
]"#;

#[test]
fn markets_response_maps_to_coin_summaries() {
    let coins = parse_markets_json(MARKETS_BODY).expect("parse markets");

    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].id, "bitcoin");
    assert_eq!(coins[0].rank, 1);
    assert_eq!(coins[0].symbol, "BTC");
    assert_eq!(coins[0].price, 64123.5);
    assert_eq!(coins[0].change_24h, Some(-1.25));
    assert_eq!(coins[0].display_name(), "Bitcoin (BTC)");
    assert_eq!(coins[1].change_24h, None);
}

#[test]
fn malformed_markets_response_is_source_error() {
    let err = parse_markets_json(r#"{"error":"rate limited"}"#).expect_err("object body");
    assert!(matches!(err, ChartError::SourceUnavailable(_)));
}

#[test]
fn market_chart_response_becomes_history() {
    // 2024-03-01, 2024-03-02, 2024-03-03 at 00:00 UTC
    let body = r#"{
        "prices": [[1709251200000, 61000.0], [1709337600000, 62000.5], [1709424000000, 61500.25]],
        "market_caps": [],
        "total_volumes": []
    }"#;
    let history = parse_market_chart_json(body).expect("parse history");

    assert_eq!(history.len(), 3);
    assert_eq!(history.timestamps(), ["Mar 01", "Mar 02", "Mar 03"]);
    assert_eq!(history.prices(), [61000.0, 62000.5, 61500.25]);
}

#[test]
fn market_chart_without_prices_is_source_error() {
    let err = parse_market_chart_json(r#"{"error":"coin not found"}"#).expect_err("missing prices");
    assert!(matches!(err, ChartError::SourceUnavailable(_)));
}

#[test]
fn default_client_config_targets_coingecko() {
    let config = MarketClientConfig::default();
    assert_eq!(config.base_url, COINGECKO_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(15));
    assert_eq!(config.min_request_interval(), Duration::from_millis(1_200));
    assert_eq!(config.currency, "usd");
    assert_eq!(config.top_coin_limit, 50);
    assert_eq!(config.history_days, 7);
    config.validate().expect("valid defaults");
}

#[test]
fn client_config_json_fills_defaults() {
    let config = MarketClientConfig::from_json_str(r#"{"currency":"eur","top_coin_limit":10}"#)
        .expect("parse");
    assert_eq!(config.currency, "eur");
    assert_eq!(config.top_coin_limit, 10);
    assert_eq!(config.history_days, 7);

    assert!(MarketClientConfig::from_json_str(r#"{"timeout_ms":0}"#).is_err());
}

#[test]
fn rate_limit_waits_only_for_remaining_interval() {
    let interval = Duration::from_millis(1_200);
    assert_eq!(rate_limit_delay(None, interval), Duration::ZERO);
    assert_eq!(
        rate_limit_delay(Some(Duration::from_millis(500)), interval),
        Duration::from_millis(700)
    );
    assert_eq!(
        rate_limit_delay(Some(Duration::from_secs(2)), interval),
        Duration::ZERO
    );
}
