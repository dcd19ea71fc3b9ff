use tracing::trace;

use crate::core::{
    ChartLayout, CoordinateMapper, PRICE_TICK_COUNT, PlotPoint, PriceHistory, PriceRange,
    ScaleTuning, Viewport, plan_layout, price_ticks,
};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextHAlign, TextMeasurer, TextPrimitive, TextVAlign,
};

use super::price_format::{format_axis_price, format_chart_title, truncate_chars};
use super::{ChartStyle, Theme};

/// Everything one draw pass depends on.
#[derive(Debug, Clone, Copy)]
pub struct ChartFrameInput<'a> {
    pub history: &'a PriceHistory,
    pub series_label: &'a str,
    pub theme: Theme,
    pub hover_index: Option<usize>,
    pub style: ChartStyle,
    pub scale_tuning: ScaleTuning,
}

/// Result of one draw pass: the primitives plus the geometry hover lookup
/// needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub frame: RenderFrame,
    /// Surface position of every sample, in sample order.
    pub points: Vec<PlotPoint>,
    pub price_range: PriceRange,
    pub layout: ChartLayout,
    pub title: String,
}

/// Materializes backend-agnostic primitives for one draw pass.
///
/// Pure with respect to its inputs: identical input, viewport and text
/// metrics always produce an identical frame. Fails with
/// `DegenerateLayout` before emitting anything when the margins leave no
/// plot area.
pub fn build_chart_frame(
    input: ChartFrameInput<'_>,
    viewport: Viewport,
    measurer: &impl TextMeasurer,
) -> ChartResult<ChartFrame> {
    let style = input.style;
    let palette = input.theme.palette();
    let history = input.history;
    let sample_count = history.len();

    let price_range = PriceRange::from_prices_tuned(history.prices(), input.scale_tuning)?;
    let ticks = price_ticks(price_range, format_axis_price);
    let layout = plan_layout(viewport, ticks, style.margins, |label| {
        measurer.text_width(label, style.axis_font_size_px, false)
    })?;
    let mapper = CoordinateMapper::new(layout.plot, price_range, sample_count)?;
    let plot = layout.plot;

    let mut frame = RenderFrame::new(viewport);
    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            palette.background,
        ),
    );

    if price_range.is_stablecoin {
        let y = mapper.price_to_y(1.0);
        frame.push_line(
            CanvasLayerKind::Reference,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                style.reference_line_width,
                palette.stablecoin_line,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
    }

    for step in 0..PRICE_TICK_COUNT {
        let y = mapper.tick_y(step, PRICE_TICK_COUNT);
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                style.grid_line_width,
                palette.grid,
            )
            .with_stroke_style(LineStrokeStyle::Dotted),
        );
    }
    if sample_count > 1 {
        for index in 0..sample_count {
            let x = mapper.index_to_x(index);
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(
                    x,
                    plot.top,
                    x,
                    plot.bottom(),
                    style.grid_line_width,
                    palette.grid,
                )
                .with_stroke_style(LineStrokeStyle::Dotted),
            );
        }
    }

    let price_label_x = layout.margins.left - style.price_label_gap_px;
    for (step, tick) in layout.ticks.iter().enumerate() {
        frame.push_text(
            CanvasLayerKind::PriceAxis,
            TextPrimitive::new(
                tick.label.clone(),
                price_label_x,
                mapper.tick_y(step, PRICE_TICK_COUNT),
                style.axis_font_size_px,
                palette.text,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }

    let time_label_y = plot.bottom() + style.time_label_offset_y_px;
    for (index, timestamp) in history.timestamps().iter().enumerate() {
        let label = truncate_chars(timestamp, style.time_label_max_chars);
        if label.is_empty() {
            continue;
        }
        frame.push_text(
            CanvasLayerKind::TimeAxis,
            TextPrimitive::new(
                label,
                mapper.index_to_x(index),
                time_label_y,
                style.axis_font_size_px,
                palette.text,
                TextHAlign::Center,
            ),
        );
    }

    let points: Vec<PlotPoint> = history
        .prices()
        .iter()
        .enumerate()
        .map(|(index, &price)| mapper.map(index, price))
        .collect();

    for pair in points.windows(2) {
        frame.push_line(
            CanvasLayerKind::Series,
            LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                style.series_line_width,
                palette.line,
            ),
        );
    }

    for (index, point) in points.iter().enumerate() {
        let (radius, fill) = if input.hover_index == Some(index) {
            (style.hover_marker_radius_px, palette.hover_marker)
        } else {
            (style.marker_radius_px, palette.line)
        };
        frame.push_circle(
            CanvasLayerKind::Markers,
            CirclePrimitive::new(point.x, point.y, radius, fill)
                .with_stroke(palette.line, style.marker_stroke_width),
        );
    }

    let title = format_chart_title(
        input.series_label,
        price_range.is_stablecoin,
        style.title_max_chars,
    );
    frame.push_text(
        CanvasLayerKind::Title,
        TextPrimitive::new(
            title.clone(),
            f64::from(viewport.width) / 2.0,
            style.title_top_px + style.title_height_px / 2.0,
            style.title_font_size_px,
            palette.text,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle)
        .bold(),
    );

    trace!(
        samples = sample_count,
        stablecoin = price_range.is_stablecoin,
        left_margin = layout.margins.left,
        "built chart frame"
    );

    Ok(ChartFrame {
        frame,
        points,
        price_range,
        layout,
        title,
    })
}
