mod hover;

pub use hover::locate_nearest_point;

use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;

/// Pointer hit-testing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTuning {
    /// Squared pixel distance below which a point counts as hovered.
    pub max_distance_sq: f64,
}

impl Default for HoverTuning {
    fn default() -> Self {
        Self {
            max_distance_sq: 400.0,
        }
    }
}

/// Sample index currently nearest the pointer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    /// Applies a locate result; returns `true` when the index changed.
    pub fn set_index(&mut self, index: Option<usize>) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set_index(None)
    }
}

/// Outcome of one pointer event, consumed by the host surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverUpdate {
    pub index: Option<usize>,
    /// Tooltip text to show; `None` hides the tooltip.
    pub tooltip: Option<String>,
    /// The hover index differs from the previous event; a redraw is needed.
    pub changed: bool,
}

/// Runs the locate step for a pointer position against `points`.
#[must_use]
pub fn locate_hover(
    pointer_x: f64,
    pointer_y: f64,
    points: &[PlotPoint],
    tuning: HoverTuning,
) -> Option<usize> {
    if !pointer_x.is_finite() || !pointer_y.is_finite() {
        return None;
    }
    locate_nearest_point(
        PlotPoint::new(pointer_x, pointer_y),
        points,
        tuning.max_distance_sq,
    )
}
