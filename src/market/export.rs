use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::api::price_format::{format_currency, format_percentage_change, format_price};
use crate::error::{ChartError, ChartResult};

use super::CoinSummary;

pub const CSV_HEADERS: [&str; 5] = ["Rank", "Name (Symbol)", "Price", "24h %", "Market Cap"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Display strings as shown in the table.
    #[default]
    Formatted,
    /// Plain numbers for machine consumption.
    Raw,
}

fn csv_error(err: csv::Error) -> ChartError {
    ChartError::Export(err.to_string())
}

fn coin_record(coin: &CoinSummary, mode: ExportMode) -> [String; 5] {
    let (price, change, market_cap) = match mode {
        ExportMode::Formatted => (
            format_price(coin.price),
            format_percentage_change(coin.change_24h),
            format_currency(coin.market_cap),
        ),
        ExportMode::Raw => (
            coin.price.to_string(),
            coin.change_24h.map(|c| c.to_string()).unwrap_or_default(),
            coin.market_cap.to_string(),
        ),
    };
    [
        coin.rank.to_string(),
        coin.display_name(),
        price,
        change,
        market_cap,
    ]
}

/// Writes the header and one record per coin.
pub fn write_csv<W: Write>(writer: W, coins: &[CoinSummary], mode: ExportMode) -> ChartResult<()> {
    if coins.is_empty() {
        return Err(ChartError::InvalidData("no coins to export".to_owned()));
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS).map_err(csv_error)?;
    for coin in coins {
        csv_writer
            .write_record(coin_record(coin, mode))
            .map_err(csv_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| ChartError::Export(e.to_string()))
}

/// Saves the coin list to `path`, replacing any existing file.
///
/// Empty input is rejected before the file is touched.
pub fn save_csv(path: impl AsRef<Path>, coins: &[CoinSummary], mode: ExportMode) -> ChartResult<()> {
    let path = path.as_ref();
    if coins.is_empty() {
        return Err(ChartError::InvalidData("no coins to export".to_owned()));
    }
    let file = File::create(path)
        .map_err(|e| ChartError::Export(format!("cannot create {}: {e}", path.display())))?;
    write_csv(file, coins, mode)?;
    debug!(path = %path.display(), rows = coins.len(), ?mode, "exported coins to csv");
    Ok(())
}
