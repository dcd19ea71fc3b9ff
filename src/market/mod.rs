//! Market data feeding the chart: the ranked coin list, per-coin history,
//! table search/sort and CSV export.

mod coin;
mod config;
pub mod export;
mod history;
pub mod table;

#[cfg(feature = "market-data")]
mod client;

pub use coin::{CoinSummary, parse_markets_json};
pub use config::{COINGECKO_API_BASE_URL, MarketClientConfig, rate_limit_delay};
pub use export::{ExportMode, save_csv, write_csv};
pub use history::{HISTORY_LABEL_FORMAT, parse_market_chart_json};
pub use table::{CoinTable, SortColumn, SortOrder, search_coins};

#[cfg(feature = "market-data")]
pub use client::CoinGeckoClient;
