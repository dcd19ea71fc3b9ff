use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Thresholds that drive visible price range selection.
///
/// Defaults reproduce the dashboard's historical behavior; none of the values
/// are derived from anything, so hosts may tune them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    /// Stablecoin detection requires `max - min` strictly below this.
    pub stablecoin_max_spread: f64,
    /// Exclusive lower bound for the mean price of a stablecoin.
    pub stablecoin_mean_low: f64,
    /// Exclusive upper bound for the mean price of a stablecoin.
    pub stablecoin_mean_high: f64,
    /// Fixed axis bounds used once a series is classified as stablecoin.
    pub stablecoin_axis_min: f64,
    pub stablecoin_axis_max: f64,
    /// Floor applied to `max - min` for regular series.
    pub min_span_absolute: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            stablecoin_max_spread: 0.02,
            stablecoin_mean_low: 0.98,
            stablecoin_mean_high: 1.02,
            stablecoin_axis_min: 0.995,
            stablecoin_axis_max: 1.005,
            min_span_absolute: 0.001,
        }
    }
}

impl ScaleTuning {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("stablecoin_max_spread", self.stablecoin_max_spread),
            ("stablecoin_mean_low", self.stablecoin_mean_low),
            ("stablecoin_mean_high", self.stablecoin_mean_high),
            ("stablecoin_axis_min", self.stablecoin_axis_min),
            ("stablecoin_axis_max", self.stablecoin_axis_max),
            ("min_span_absolute", self.min_span_absolute),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale tuning `{name}` must be finite"
                )));
            }
        }
        if self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale tuning `min_span_absolute` must be > 0".to_owned(),
            ));
        }
        if self.stablecoin_axis_max <= self.stablecoin_axis_min {
            return Err(ChartError::InvalidData(
                "stablecoin axis max must be greater than min".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Visible price range for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    /// Divisor used by coordinate mapping; always > 0.
    pub range: f64,
    pub is_stablecoin: bool,
}

impl PriceRange {
    pub fn from_prices(prices: &[f64]) -> ChartResult<Self> {
        Self::from_prices_tuned(prices, ScaleTuning::default())
    }

    pub fn from_prices_tuned(prices: &[f64], tuning: ScaleTuning) -> ChartResult<Self> {
        if prices.is_empty() {
            return Err(ChartError::InvalidData(
                "price range requires at least one sample".to_owned(),
            ));
        }

        if let Some(index) = prices.iter().position(|price| !price.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "price at index {index} must be finite"
            )));
        }

        let (min, max) = prices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &price| {
                (min.min(price), max.max(price))
            });

        if prices.len() > 1 {
            let spread = max - min;
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            if spread < tuning.stablecoin_max_spread
                && mean > tuning.stablecoin_mean_low
                && mean < tuning.stablecoin_mean_high
            {
                return Ok(Self {
                    min: tuning.stablecoin_axis_min,
                    max: tuning.stablecoin_axis_max,
                    range: tuning.stablecoin_axis_max - tuning.stablecoin_axis_min,
                    is_stablecoin: true,
                });
            }
        }

        Ok(Self {
            min,
            max,
            range: (max - min).max(tuning.min_span_absolute),
            is_stablecoin: false,
        })
    }

    /// Price at tick `step` of `steps` evenly spaced ticks starting at `min`.
    #[must_use]
    pub fn tick_value(self, step: usize, steps: usize) -> f64 {
        let denominator = steps.saturating_sub(1).max(1) as f64;
        self.min + (step as f64 / denominator) * self.range
    }
}
