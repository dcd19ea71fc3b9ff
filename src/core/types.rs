use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Surface-space position of one plotted sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_sq(self, other: PlotPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// One (timestamp, price) observation borrowed from a [`PriceHistory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub timestamp: &'a str,
    pub price: f64,
}

/// Parallel timestamp/price series for a single coin.
///
/// Timestamps are opaque display strings; the chart never parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    timestamps: Vec<String>,
    prices: Vec<f64>,
}

impl PriceHistory {
    pub fn new(timestamps: Vec<String>, prices: Vec<f64>) -> ChartResult<Self> {
        if timestamps.is_empty() || prices.is_empty() {
            return Err(ChartError::InvalidData(
                "price history must not be empty".to_owned(),
            ));
        }
        if timestamps.len() != prices.len() {
            return Err(ChartError::InvalidData(format!(
                "timestamp/price length mismatch: {} != {}",
                timestamps.len(),
                prices.len()
            )));
        }
        if let Some(index) = prices.iter().position(|price| !price.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "price at index {index} must be finite"
            )));
        }

        Ok(Self { timestamps, prices })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[must_use]
    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample<'_>> {
        Some(Sample {
            timestamp: self.timestamps.get(index)?,
            price: *self.prices.get(index)?,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> {
        self.timestamps
            .iter()
            .zip(self.prices.iter().copied())
            .map(|(timestamp, price)| Sample { timestamp, price })
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotPoint, PriceHistory};

    #[test]
    fn history_rejects_length_mismatch() {
        let result = PriceHistory::new(
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            vec![1.0, 2.0],
        );
        assert!(result.is_err());
    }

    #[test]
    fn history_rejects_non_finite_prices() {
        let result = PriceHistory::new(vec!["a".to_owned()], vec![f64::NAN]);
        assert!(result.is_err());
    }

    #[test]
    fn samples_pair_timestamps_with_prices() {
        let history =
            PriceHistory::new(vec!["a".to_owned(), "b".to_owned()], vec![1.5, 2.5]).expect("valid");
        let collected: Vec<(&str, f64)> = history
            .samples()
            .map(|sample| (sample.timestamp, sample.price))
            .collect();
        assert_eq!(collected, vec![("a", 1.5), ("b", 2.5)]);
    }

    #[test]
    fn distance_is_squared_euclidean() {
        let a = PlotPoint::new(100.0, 100.0);
        assert_eq!(a.distance_sq(PlotPoint::new(103.0, 104.0)), 25.0);
    }
}
