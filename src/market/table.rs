use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::CoinSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Rank,
    Name,
    Price,
    Change24h,
    MarketCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Coins whose name or symbol contains `query`, ignoring case.
///
/// An empty query matches everything.
#[must_use]
pub fn search_coins<'a>(coins: &'a [CoinSummary], query: &str) -> Vec<&'a CoinSummary> {
    if query.is_empty() {
        return coins.iter().collect();
    }
    let query = query.to_lowercase();
    coins
        .iter()
        .filter(|coin| {
            coin.name.to_lowercase().contains(&query) || coin.symbol.to_lowercase().contains(&query)
        })
        .collect()
}

fn compare_by(column: SortColumn, a: &CoinSummary, b: &CoinSummary) -> Ordering {
    match column {
        SortColumn::Rank => a.rank.cmp(&b.rank),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Price => OrderedFloat(a.price).cmp(&OrderedFloat(b.price)),
        SortColumn::Change24h => a.change_24h.map(OrderedFloat).cmp(&b.change_24h.map(OrderedFloat)),
        SortColumn::MarketCap => OrderedFloat(a.market_cap).cmp(&OrderedFloat(b.market_cap)),
    }
}

/// Sorts in place; equal keys keep their relative order.
pub fn sort_coins(coins: &mut [CoinSummary], column: SortColumn, order: SortOrder) {
    coins.sort_by(|a, b| {
        let ordering = compare_by(column, a, b);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Filter and sort state behind the market table.
#[derive(Debug, Clone, Default)]
pub struct CoinTable {
    all: Vec<CoinSummary>,
    rows: Vec<CoinSummary>,
    query: String,
    sort_column: SortColumn,
    sort_order: SortOrder,
}

impl CoinTable {
    #[must_use]
    pub fn new(coins: Vec<CoinSummary>) -> Self {
        let mut table = Self::default();
        table.set_coins(coins);
        table
    }

    /// Replaces the data set, keeping the current query and sort.
    pub fn set_coins(&mut self, coins: Vec<CoinSummary>) {
        self.all = coins;
        self.refresh();
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_owned();
        self.refresh();
    }

    /// Header click: the active column flips its order, any other column
    /// becomes active in ascending order.
    pub fn click_column(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_column = column;
            self.sort_order = SortOrder::Ascending;
        }
        sort_coins(&mut self.rows, self.sort_column, self.sort_order);
    }

    #[must_use]
    pub fn rows(&self) -> &[CoinSummary] {
        &self.rows
    }

    #[must_use]
    pub fn all_coins(&self) -> &[CoinSummary] {
        &self.all
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    fn refresh(&mut self) {
        self.rows = search_coins(&self.all, &self.query)
            .into_iter()
            .cloned()
            .collect();
        sort_coins(&mut self.rows, self.sort_column, self.sort_order);
    }
}
