use serde::{Deserialize, Serialize};

use crate::core::price_range::PriceRange;
use crate::core::types::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// Sub-region of the surface where samples are mapped to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Maps (sample index, price) pairs into surface pixels.
///
/// Index space is evenly distributed over the plot width regardless of the
/// timestamp values; price space is linear with higher prices nearer the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    plot: PlotRect,
    price_range: PriceRange,
    sample_count: usize,
}

impl CoordinateMapper {
    pub fn new(plot: PlotRect, price_range: PriceRange, sample_count: usize) -> ChartResult<Self> {
        if !plot.is_drawable() {
            return Err(ChartError::DegenerateLayout {
                plot_width: plot.width,
                plot_height: plot.height,
            });
        }
        if !price_range.range.is_finite() || price_range.range <= 0.0 {
            return Err(ChartError::InvalidData(
                "price range span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            plot,
            price_range,
            sample_count,
        })
    }

    #[must_use]
    pub fn plot(self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn price_range(self) -> PriceRange {
        self.price_range
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    /// A single sample lands on the left edge.
    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        let denominator = self.sample_count.saturating_sub(1).max(1) as f64;
        self.plot.left + (index as f64 / denominator) * self.plot.width
    }

    #[must_use]
    pub fn price_to_y(self, price: f64) -> f64 {
        let normalized = (price - self.price_range.min) / self.price_range.range;
        self.plot.bottom() - normalized * self.plot.height
    }

    #[must_use]
    pub fn map(self, index: usize, price: f64) -> PlotPoint {
        PlotPoint::new(self.index_to_x(index), self.price_to_y(price))
    }

    /// Y position of tick `step` out of `steps` evenly spaced ticks.
    #[must_use]
    pub fn tick_y(self, step: usize, steps: usize) -> f64 {
        let denominator = steps.saturating_sub(1).max(1) as f64;
        self.plot.bottom() - (step as f64 / denominator) * self.plot.height
    }
}
