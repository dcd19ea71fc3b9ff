use tracing::{debug, trace, warn};

use crate::core::{PlotPoint, PriceHistory, PriceRange, ScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, HoverTuning, HoverUpdate, locate_hover};
use crate::render::{Renderer, TextMeasurer};

use super::price_format::format_tooltip;
use super::render_frame_builder::{ChartFrame, ChartFrameInput, build_chart_frame};
use super::{ChartEngineConfig, ChartStyle, Theme};

#[cfg(feature = "cairo-backend")]
use crate::render::{CairoContextMeasurer, CairoContextRenderer};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the chart state (loaded history, theme, hover) and the
/// geometry of the most recent draw. The point cache is only ever written
/// from the value returned by the frame builder and only read by hover
/// lookup.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: ChartStyle,
    scale_tuning: ScaleTuning,
    hover_tuning: HoverTuning,
    history: Option<PriceHistory>,
    series_label: String,
    theme: Theme,
    hover: HoverState,
    tooltip: Option<String>,
    plotted_points: Vec<PlotPoint>,
    last_price_range: Option<PriceRange>,
    needs_redraw: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no samples loaded.
    pub fn new(mut renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        renderer.resize(config.viewport)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            style: config.style,
            scale_tuning: config.scale_tuning,
            hover_tuning: config.hover_tuning,
            history: None,
            series_label: String::new(),
            theme: config.theme,
            hover: HoverState::default(),
            tooltip: None,
            plotted_points: Vec::new(),
            last_price_range: None,
            needs_redraw: true,
        })
    }

    /// Replaces the displayed series.
    ///
    /// Mismatched or empty input is rejected and leaves every piece of chart
    /// state, including the last plotted geometry, untouched.
    pub fn set_chart_data(
        &mut self,
        timestamps: Vec<String>,
        prices: Vec<f64>,
        series_label: impl Into<String>,
    ) -> ChartResult<()> {
        let history = match PriceHistory::new(timestamps, prices) {
            Ok(history) => history,
            Err(err) => {
                warn!(error = %err, "rejected chart data");
                return Err(err);
            }
        };
        self.set_history(history, series_label);
        Ok(())
    }

    /// Replaces the displayed series with an already validated history.
    pub fn set_history(&mut self, history: PriceHistory, series_label: impl Into<String>) {
        let series_label = series_label.into();
        debug!(
            samples = history.len(),
            label = %series_label,
            "set chart data"
        );
        self.history = Some(history);
        self.series_label = series_label;
        self.hover.clear();
        self.tooltip = None;
        self.plotted_points.clear();
        self.last_price_range = None;
        self.needs_redraw = true;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        debug!(?theme, "set chart theme");
        self.theme = theme;
        self.plotted_points.clear();
        self.needs_redraw = true;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }
        trace!(width = viewport.width, height = viewport.height, "resize chart");
        self.renderer.resize(viewport)?;
        self.viewport = viewport;
        self.plotted_points.clear();
        self.needs_redraw = true;
        Ok(())
    }

    /// Hover lookup against the geometry of the last draw.
    ///
    /// Without loaded data or plotted geometry the event is ignored.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverUpdate {
        let Some(history) = &self.history else {
            return self.current_hover_update(false);
        };
        if self.plotted_points.is_empty() {
            return self.current_hover_update(false);
        }

        let index = locate_hover(x, y, &self.plotted_points, self.hover_tuning);
        self.tooltip = index
            .and_then(|index| history.sample(index))
            .map(|sample| format_tooltip(sample.timestamp, sample.price));
        let changed = self.hover.set_index(index);
        if changed {
            trace!(?index, "hover index changed");
            self.needs_redraw = true;
        }
        self.current_hover_update(changed)
    }

    pub fn pointer_leave(&mut self) -> HoverUpdate {
        let changed = self.hover.clear();
        self.tooltip = None;
        if changed {
            self.needs_redraw = true;
        }
        self.current_hover_update(changed)
    }

    fn current_hover_update(&self, changed: bool) -> HoverUpdate {
        HoverUpdate {
            index: self.hover.index(),
            tooltip: self.tooltip.clone(),
            changed,
        }
    }

    /// Builds the frame for the current state without drawing it.
    ///
    /// Returns `Ok(None)` when no data is loaded.
    pub fn build_frame(&self, measurer: &impl TextMeasurer) -> ChartResult<Option<ChartFrame>> {
        let Some(history) = &self.history else {
            return Ok(None);
        };
        let input = ChartFrameInput {
            history,
            series_label: &self.series_label,
            theme: self.theme,
            hover_index: self.hover.index(),
            style: self.style,
            scale_tuning: self.scale_tuning,
        };
        build_chart_frame(input, self.viewport, measurer).map(Some)
    }

    /// Stores the geometry of a finished draw, or clears it when the layout
    /// was degenerate. Other errors propagate.
    fn absorb_frame_result(
        &mut self,
        result: ChartResult<Option<ChartFrame>>,
    ) -> ChartResult<Option<ChartFrame>> {
        match result {
            Ok(Some(chart_frame)) => Ok(Some(chart_frame)),
            Ok(None) => {
                self.needs_redraw = false;
                Ok(None)
            }
            Err(ChartError::DegenerateLayout {
                plot_width,
                plot_height,
            }) => {
                debug!(plot_width, plot_height, "surface too small, skipping draw");
                self.plotted_points.clear();
                self.last_price_range = None;
                self.needs_redraw = false;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn commit_frame(&mut self, chart_frame: ChartFrame) -> Vec<PlotPoint> {
        self.plotted_points = chart_frame.points;
        self.last_price_range = Some(chart_frame.price_range);
        self.needs_redraw = false;
        self.plotted_points.clone()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        self.plotted_points.clear();
        self.needs_redraw = true;
        Ok(())
    }

    #[must_use]
    pub fn history(&self) -> Option<&PriceHistory> {
        self.history.as_ref()
    }

    #[must_use]
    pub fn series_label(&self) -> &str {
        &self.series_label
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.index()
    }

    #[must_use]
    pub fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Geometry of the most recent successful draw.
    #[must_use]
    pub fn plotted_points(&self) -> &[PlotPoint] {
        &self.plotted_points
    }

    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.last_price_range
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer + TextMeasurer> ChartEngine<R> {
    /// Draws the current state through the owned renderer and returns the
    /// plotted points.
    ///
    /// With no data loaded nothing is drawn. A surface too small for the
    /// margins draws nothing and yields an empty point set.
    pub fn render(&mut self) -> ChartResult<Vec<PlotPoint>> {
        let result = self.build_frame(&self.renderer);
        let Some(chart_frame) = self.absorb_frame_result(result)? else {
            return Ok(self.plotted_points.clone());
        };
        self.renderer.render(&chart_frame.frame)?;
        Ok(self.commit_frame(chart_frame))
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + CairoContextRenderer> ChartEngine<R> {
    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
    ) -> ChartResult<Vec<PlotPoint>> {
        let result = self.build_frame(&CairoContextMeasurer::new(context));
        let Some(chart_frame) = self.absorb_frame_result(result)? else {
            return Ok(self.plotted_points.clone());
        };
        self.renderer
            .render_on_cairo_context(context, &chart_frame.frame)?;
        Ok(self.commit_frame(chart_frame))
    }
}
