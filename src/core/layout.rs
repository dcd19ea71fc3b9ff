use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::price_range::PriceRange;
use crate::core::scale::PlotRect;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Number of evenly spaced price ticks on the left axis.
pub const PRICE_TICK_COUNT: usize = 5;

/// Fixed margins and the padding added to the widest price label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginPolicy {
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
    pub label_padding: f64,
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            top: 50.0,
            bottom: 50.0,
            right: 20.0,
            label_padding: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
}

/// One price tick with its pre-formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub margins: Margins,
    pub plot: PlotRect,
    pub ticks: SmallVec<[PriceTick; PRICE_TICK_COUNT]>,
}

/// Builds the price ticks for `range`, formatting each with `format_label`.
pub fn price_ticks(
    range: PriceRange,
    format_label: impl Fn(f64, bool) -> String,
) -> SmallVec<[PriceTick; PRICE_TICK_COUNT]> {
    (0..PRICE_TICK_COUNT)
        .map(|step| {
            let value = range.tick_value(step, PRICE_TICK_COUNT);
            PriceTick {
                value,
                label: format_label(value, range.is_stablecoin),
            }
        })
        .collect()
}

/// Derives margins from the widest tick label and shrinks the surface into
/// the plot rectangle.
///
/// `measure` returns the rendered width of a label in pixels.
pub fn plan_layout(
    viewport: Viewport,
    ticks: SmallVec<[PriceTick; PRICE_TICK_COUNT]>,
    policy: MarginPolicy,
    measure: impl Fn(&str) -> f64,
) -> ChartResult<ChartLayout> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let widest_label = ticks
        .iter()
        .map(|tick| measure(&tick.label))
        .fold(0.0_f64, f64::max);

    let margins = Margins {
        left: widest_label + policy.label_padding,
        top: policy.top,
        bottom: policy.bottom,
        right: policy.right,
    };

    let plot = PlotRect::new(
        margins.left,
        margins.top,
        f64::from(viewport.width) - margins.left - margins.right,
        f64::from(viewport.height) - margins.top - margins.bottom,
    );
    if !plot.is_drawable() {
        return Err(ChartError::DegenerateLayout {
            plot_width: plot.width,
            plot_height: plot.height,
        });
    }

    Ok(ChartLayout {
        margins,
        plot,
        ticks,
    })
}
