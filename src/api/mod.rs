mod chart_panel;
mod engine;
mod engine_config;
pub mod price_format;
mod render_frame_builder;
mod render_style;
mod status;
mod theme;

pub use chart_panel::{ChartPanel, ChartPanelContent, DEFAULT_PLACEHOLDER, HistoryRequest};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ENGINE_CONFIG_JSON_SCHEMA_V1};
pub use render_frame_builder::{ChartFrame, ChartFrameInput, build_chart_frame};
pub use render_style::ChartStyle;
pub use status::{StatusEvent, StatusKind};
pub use theme::{DARK_PALETTE, LIGHT_PALETTE, Theme, ThemePalette};
