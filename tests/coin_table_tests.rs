use coin_chart::market::{CoinSummary, CoinTable, SortColumn, SortOrder, search_coins};

fn coin(rank: u32, name: &str, symbol: &str, price: f64, change: Option<f64>, cap: f64) -> CoinSummary {
    CoinSummary {
        id: name.to_lowercase(),
        rank,
        name: name.to_owned(),
        symbol: symbol.to_owned(),
        price,
        change_24h: change,
        market_cap: cap,
    }
}

fn coins() -> Vec<CoinSummary> {
    vec![
        coin(1, "Bitcoin", "BTC", 60_000.0, Some(1.5), 1.2e12),
        coin(2, "Ethereum", "ETH", 3_000.0, Some(-2.0), 3.6e11),
        coin(3, "Tether", "USDT", 1.0, None, 1.1e11),
        coin(4, "Bitcoin Cash", "BCH", 450.0, Some(0.3), 8.8e9),
    ]
}

fn symbols(rows: &[CoinSummary]) -> Vec<&str> {
    rows.iter().map(|c| c.symbol.as_str()).collect()
}

#[test]
fn search_matches_name_or_symbol_ignoring_case() {
    let coins = coins();

    let by_name: Vec<&str> = search_coins(&coins, "bitcoin")
        .iter()
        .map(|c| c.symbol.as_str())
        .collect();
    assert_eq!(by_name, vec!["BTC", "BCH"]);

    let by_symbol = search_coins(&coins, "usdt");
    assert_eq!(by_symbol.len(), 1);
    assert_eq!(by_symbol[0].name, "Tether");

    assert_eq!(search_coins(&coins, "").len(), 4);
    assert!(search_coins(&coins, "solana").is_empty());
}

#[test]
fn table_defaults_to_rank_ascending() {
    let table = CoinTable::new(coins());
    assert_eq!(table.sort_column(), SortColumn::Rank);
    assert_eq!(table.sort_order(), SortOrder::Ascending);
    assert_eq!(symbols(table.rows()), vec!["BTC", "ETH", "USDT", "BCH"]);
}

#[test]
fn clicking_same_column_toggles_order() {
    let mut table = CoinTable::new(coins());

    table.click_column(SortColumn::Price);
    assert_eq!(table.sort_order(), SortOrder::Ascending);
    assert_eq!(symbols(table.rows()), vec!["USDT", "BCH", "ETH", "BTC"]);

    table.click_column(SortColumn::Price);
    assert_eq!(table.sort_order(), SortOrder::Descending);
    assert_eq!(symbols(table.rows()), vec!["BTC", "ETH", "BCH", "USDT"]);

    table.click_column(SortColumn::Name);
    assert_eq!(table.sort_column(), SortColumn::Name);
    assert_eq!(table.sort_order(), SortOrder::Ascending);
    assert_eq!(symbols(table.rows()), vec!["BTC", "BCH", "ETH", "USDT"]);
}

#[test]
fn missing_change_sorts_first_ascending() {
    let mut table = CoinTable::new(coins());
    table.click_column(SortColumn::Change24h);
    assert_eq!(symbols(table.rows()), vec!["USDT", "ETH", "BCH", "BTC"]);
}

#[test]
fn search_keeps_active_sort() {
    let mut table = CoinTable::new(coins());
    table.click_column(SortColumn::MarketCap);
    table.click_column(SortColumn::MarketCap);

    table.search("bit");
    assert_eq!(table.query(), "bit");
    assert_eq!(symbols(table.rows()), vec!["BTC", "BCH"]);

    table.search("");
    assert_eq!(symbols(table.rows()), vec!["BTC", "ETH", "USDT", "BCH"]);
    assert_eq!(table.all_coins().len(), 4);
}
