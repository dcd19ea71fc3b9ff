use serde::{Deserialize, Serialize};

use crate::core::MarginPolicy;
use crate::error::{ChartError, ChartResult};

/// Geometry and typography of the price chart; colors come from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub margins: MarginPolicy,
    pub axis_font_size_px: f64,
    pub title_font_size_px: f64,
    /// Top edge and height of the title band; the title is centered in it.
    pub title_top_px: f64,
    pub title_height_px: f64,
    pub title_max_chars: usize,
    /// Gap between right-aligned price labels and the plot's left edge.
    pub price_label_gap_px: f64,
    /// Distance from the plot bottom to the top of the time labels.
    pub time_label_offset_y_px: f64,
    pub time_label_max_chars: usize,
    pub grid_line_width: f64,
    pub reference_line_width: f64,
    pub series_line_width: f64,
    pub marker_radius_px: f64,
    pub hover_marker_radius_px: f64,
    pub marker_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margins: MarginPolicy::default(),
            axis_font_size_px: 8.0,
            title_font_size_px: 12.0,
            title_top_px: 10.0,
            title_height_px: 30.0,
            title_max_chars: 50,
            price_label_gap_px: 5.0,
            time_label_offset_y_px: 5.0,
            time_label_max_chars: 10,
            grid_line_width: 1.0,
            reference_line_width: 1.0,
            series_line_width: 2.0,
            marker_radius_px: 3.0,
            hover_marker_radius_px: 6.0,
            marker_stroke_width: 2.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("margins.top", self.margins.top),
            ("margins.bottom", self.margins.bottom),
            ("margins.right", self.margins.right),
            ("margins.label_padding", self.margins.label_padding),
            ("title_top_px", self.title_top_px),
            ("title_height_px", self.title_height_px),
            ("price_label_gap_px", self.price_label_gap_px),
            ("time_label_offset_y_px", self.time_label_offset_y_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart style `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_font_size_px", self.axis_font_size_px),
            ("title_font_size_px", self.title_font_size_px),
            ("grid_line_width", self.grid_line_width),
            ("reference_line_width", self.reference_line_width),
            ("series_line_width", self.series_line_width),
            ("marker_radius_px", self.marker_radius_px),
            ("hover_marker_radius_px", self.hover_marker_radius_px),
            ("marker_stroke_width", self.marker_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart style `{name}` must be finite and > 0"
                )));
            }
        }
        if self.title_max_chars == 0 || self.time_label_max_chars == 0 {
            return Err(ChartError::InvalidData(
                "chart style label truncation limits must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
