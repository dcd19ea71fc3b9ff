use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayerPrimitives, LinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are kept in [`CanvasLayerKind::CANONICAL_ORDER`]; later layers are
/// drawn on top of earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }
}
