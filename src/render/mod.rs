mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, LayerPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign,
    TextPrimitive, TextVAlign,
};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Follows the engine viewport. Backends without an owned surface keep
    /// the default no-op.
    fn resize(&mut self, _viewport: Viewport) -> ChartResult<()> {
        Ok(())
    }
}

/// Text metrics provider used for layout before any drawing happens.
pub trait TextMeasurer {
    /// Rendered width in pixels of `text` at the given font size and weight.
    fn text_width(&self, text: &str, font_size_px: f64, bold: bool) -> f64;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextMeasurer, CairoContextRenderer, CairoRenderStats, CairoRenderer,
};
