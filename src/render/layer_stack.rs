use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Draw layers of the price chart, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    /// Stablecoin reference line; sits below the grid.
    Reference,
    Grid,
    PriceAxis,
    TimeAxis,
    Series,
    Markers,
    Title,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [CanvasLayerKind; 8] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Reference,
        CanvasLayerKind::Grid,
        CanvasLayerKind::PriceAxis,
        CanvasLayerKind::TimeAxis,
        CanvasLayerKind::Series,
        CanvasLayerKind::Markers,
        CanvasLayerKind::Title,
    ];
}

/// Primitives belonging to one layer.
///
/// Backends draw rects, then lines, then circles, then texts within a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn reference_line_sits_between_background_and_grid() {
        let order = CanvasLayerKind::CANONICAL_ORDER;
        let position = |kind| order.iter().position(|k| *k == kind).expect("listed");
        assert!(position(CanvasLayerKind::Background) < position(CanvasLayerKind::Reference));
        assert!(position(CanvasLayerKind::Reference) < position(CanvasLayerKind::Grid));
        assert_eq!(order.last(), Some(&CanvasLayerKind::Title));
    }
}
