use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use coin_chart::ChartError;
use coin_chart::market::{CoinSummary, ExportMode, save_csv, write_csv};

fn coins() -> Vec<CoinSummary> {
    vec![
        CoinSummary {
            id: "bitcoin".to_owned(),
            rank: 1,
            name: "Bitcoin".to_owned(),
            symbol: "BTC".to_owned(),
            price: 60_000.0,
            change_24h: Some(1.234),
            market_cap: 1.2e12,
        },
        CoinSummary {
            id: "tether".to_owned(),
            rank: 3,
            name: "Tether".to_owned(),
            symbol: "USDT".to_owned(),
            price: 0.9995,
            change_24h: None,
            market_cap: 1.1e11,
        },
    ]
}

fn unique_temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("coin_chart_{name}_{}_{nanos}.csv", std::process::id()))
}

fn write_to_string(mode: ExportMode) -> String {
    let mut out = Vec::new();
    write_csv(&mut out, &coins(), mode).expect("write csv");
    String::from_utf8(out).expect("utf8 csv")
}

#[test]
fn formatted_export_uses_display_strings() {
    let csv = write_to_string(ExportMode::Formatted);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Rank,Name (Symbol),Price,24h %,Market Cap");
    assert_eq!(lines[1], "1,Bitcoin (BTC),\"$60,000.00\",+1.23%,$1.20 T");
    assert_eq!(lines[2], "3,Tether (USDT),$0.999500,N/A,$110.00 B");
}

#[test]
fn raw_export_uses_plain_numbers() {
    let csv = write_to_string(ExportMode::Raw);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Rank,Name (Symbol),Price,24h %,Market Cap");
    assert_eq!(lines[1], "1,Bitcoin (BTC),60000,1.234,1200000000000");
    assert_eq!(lines[2], "3,Tether (USDT),0.9995,,110000000000");
}

#[test]
fn empty_coin_list_is_rejected() {
    let mut out = Vec::new();
    let err = write_csv(&mut out, &[], ExportMode::Formatted).expect_err("empty");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(out.is_empty());

    let path = unique_temp_path("empty");
    let err = save_csv(&path, &[], ExportMode::Raw).expect_err("empty");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(!path.exists());
}

#[test]
fn save_csv_writes_file() {
    let path = unique_temp_path("save");
    save_csv(&path, &coins(), ExportMode::Formatted).expect("save csv");

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, write_to_string(ExportMode::Formatted));
    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_path_is_export_error() {
    let path = unique_temp_path("missing_dir").join("nested").join("out.csv");
    let err = save_csv(&path, &coins(), ExportMode::Formatted).expect_err("missing dir");
    assert!(matches!(err, ChartError::Export(_)));
}
