use coin_chart::core::PlotPoint;
use coin_chart::interaction::{HoverTuning, locate_hover, locate_nearest_point};

fn points() -> Vec<PlotPoint> {
    vec![PlotPoint::new(100.0, 100.0), PlotPoint::new(200.0, 100.0)]
}

#[test]
fn pointer_near_first_point_selects_it() {
    assert_eq!(
        locate_nearest_point(PlotPoint::new(105.0, 100.0), &points(), 400.0),
        Some(0)
    );
}

#[test]
fn pointer_between_distant_points_selects_nothing() {
    assert_eq!(
        locate_nearest_point(PlotPoint::new(150.0, 100.0), &points(), 400.0),
        None
    );
}

#[test]
fn threshold_is_exclusive() {
    // distance^2 == 400 exactly
    assert_eq!(
        locate_nearest_point(PlotPoint::new(120.0, 100.0), &points(), 400.0),
        None
    );
    assert_eq!(
        locate_nearest_point(PlotPoint::new(119.9, 100.0), &points(), 400.0),
        Some(0)
    );
}

#[test]
fn equidistant_points_resolve_to_lowest_index() {
    let points = vec![
        PlotPoint::new(100.0, 100.0),
        PlotPoint::new(110.0, 100.0),
        PlotPoint::new(105.0, 90.0),
    ];
    assert_eq!(
        locate_nearest_point(PlotPoint::new(105.0, 100.0), &points, 400.0),
        Some(0)
    );
}

#[test]
fn non_finite_pointer_selects_nothing() {
    let tuning = HoverTuning::default();
    assert_eq!(tuning.max_distance_sq, 400.0);
    assert_eq!(locate_hover(f64::NAN, 100.0, &points(), tuning), None);
    assert_eq!(locate_hover(105.0, 100.0, &points(), tuning), Some(0));
}
