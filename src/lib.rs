//! coin-chart: price-history charting for a crypto market dashboard.
//!
//! The crate turns `(timestamp, price)` samples into a themed, auto-scaled
//! line chart and answers pointer hover queries against the drawn geometry.
//! Rendering goes through backend-agnostic primitives so the same frame can
//! be drawn headless, into a PNG, or inside a GTK `DrawingArea`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod market;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
