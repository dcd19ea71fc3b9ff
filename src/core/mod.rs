pub mod layout;
pub mod price_range;
pub mod scale;
pub mod types;

pub use layout::{
    ChartLayout, MarginPolicy, Margins, PRICE_TICK_COUNT, PriceTick, plan_layout, price_ticks,
};
pub use price_range::{PriceRange, ScaleTuning};
pub use scale::{CoordinateMapper, PlotRect};
pub use types::{PlotPoint, PriceHistory, Sample, Viewport};
