use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xff) as f64 / 255.0,
            ((packed >> 8) & 0xff) as f64 / 255.0,
            (packed & 0xff) as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ChartError::InvalidData(format!(
                "hex color `{hex}` must have 6 digits"
            )));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|e| ChartError::InvalidData(format!("invalid hex color `{hex}`: {e}")))?;
        Ok(Self::from_rgb_u32(packed))
    }

    /// Lowercase `#rrggbb`, alpha ignored.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// Dash pattern in pixels for backends that need one; empty means solid.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> Vec<f64> {
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![4.0 * stroke_width, 2.0 * stroke_width],
            Self::Dotted => vec![stroke_width, 2.0 * stroke_width],
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Filled circle with an outline, used for point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            fill_color,
            stroke_color: fill_color,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke_color: Color, stroke_width: f64) -> Self {
        self.stroke_color = stroke_color;
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub bold: bool,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            bold: false,
            color,
            h_align,
            v_align: TextVAlign::Top,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_round_trip_keeps_channels() {
        let color = Color::from_hex("#1e293b").expect("valid hex");
        assert_eq!(color.to_hex(), "#1e293b");
        assert_eq!(color, Color::from_rgb_u32(0x1e293b));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }
}
