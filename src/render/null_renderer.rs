use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextMeasurer};

/// Average glyph advance as a fraction of the font size.
const NULL_GLYPH_ADVANCE_RATIO: f64 = 0.6;
const NULL_BOLD_ADVANCE_RATIO: f64 = 0.66;

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced. Text is measured with a fixed per-character
/// advance so layouts stay deterministic without a font stack.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
    pub last_rect_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_circle_count = frame.circle_count();
        self.last_rect_count = frame.rect_count();
        Ok(())
    }
}

impl TextMeasurer for NullRenderer {
    fn text_width(&self, text: &str, font_size_px: f64, bold: bool) -> f64 {
        let ratio = if bold {
            NULL_BOLD_ADVANCE_RATIO
        } else {
            NULL_GLYPH_ADVANCE_RATIO
        };
        text.chars().count() as f64 * font_size_px * ratio
    }
}
