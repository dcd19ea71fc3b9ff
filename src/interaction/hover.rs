use ordered_float::OrderedFloat;

use crate::core::PlotPoint;

/// Returns the index of the plotted point nearest to `pointer`, provided its
/// squared distance is strictly below `max_distance_sq`.
///
/// Ties resolve to the lowest index, so results follow sample order.
#[must_use]
pub fn locate_nearest_point(
    pointer: PlotPoint,
    points: &[PlotPoint],
    max_distance_sq: f64,
) -> Option<usize> {
    let (index, distance_sq) = points
        .iter()
        .enumerate()
        .map(|(index, point)| (index, OrderedFloat(point.distance_sq(pointer))))
        .min_by_key(|(_, distance_sq)| *distance_sq)?;

    (distance_sq.0 < max_distance_sq).then_some(index)
}
