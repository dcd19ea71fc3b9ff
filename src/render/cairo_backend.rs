use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextMeasurer, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Replaces the offscreen surface when the host surface changes size.
    pub fn resize_surface(&mut self, width: i32, height: i32) -> ChartResult<()> {
        if width == self.surface.width() && height == self.surface.height() {
            return Ok(());
        }
        *self = Self::new(width, height)?;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::Export(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Export(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            for rect in &layer.rects {
                fill_rect(context, *rect)?;
                stats.rects_drawn += 1;
            }
            for line in &layer.lines {
                stroke_line(context, *line)?;
                stats.lines_drawn += 1;
            }
            for circle in &layer.circles {
                draw_circle(context, *circle)?;
                stats.circles_drawn += 1;
            }
            for text in &layer.texts {
                draw_text(context, text);
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let width = i32::try_from(viewport.width).map_err(|_| ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        let height = i32::try_from(viewport.height).map_err(|_| ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        self.resize_surface(width, height)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

impl TextMeasurer for CairoRenderer {
    fn text_width(&self, text: &str, font_size_px: f64, bold: bool) -> f64 {
        match Context::new(&self.surface) {
            Ok(context) => measure_on_context(&context, text, font_size_px, bold),
            Err(_) => 0.0,
        }
    }
}

/// Measures text against an external Cairo context, such as the one handed
/// to a GTK draw callback.
#[derive(Debug)]
pub struct CairoContextMeasurer<'a> {
    context: &'a Context,
}

impl<'a> CairoContextMeasurer<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }
}

impl TextMeasurer for CairoContextMeasurer<'_> {
    fn text_width(&self, text: &str, font_size_px: f64, bold: bool) -> f64 {
        measure_on_context(self.context, text, font_size_px, bold)
    }
}

fn font_description(font_size_px: f64, bold: bool) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family("Sans");
    description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    if bold {
        description.set_weight(pango::Weight::Bold);
    }
    description
}

fn measure_on_context(context: &Context, text: &str, font_size_px: f64, bold: bool) -> f64 {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(font_size_px, bold)));
    layout.set_text(text);
    let (width, _height) = layout.pixel_size();
    f64::from(width)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    apply_color(context, rect.fill_color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn stroke_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(&line.stroke_style.dash_pattern(line.stroke_width), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    result
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill_color);
    if circle.stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        apply_color(context, circle.stroke_color);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(text.font_size_px, text.bold)));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let y = match text.v_align {
        TextVAlign::Top => text.y,
        TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
    };

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
