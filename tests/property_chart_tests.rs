use coin_chart::api::{ChartFrameInput, ChartStyle, Theme, build_chart_frame};
use coin_chart::core::{PlotPoint, PriceHistory, PriceRange, ScaleTuning, Viewport};
use coin_chart::interaction::locate_nearest_point;
use coin_chart::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn price_range_span_is_always_positive(
        prices in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
    ) {
        let range = PriceRange::from_prices(&prices).expect("valid prices");

        prop_assert!(range.range > 0.0);
        prop_assert!(range.range.is_finite());
        prop_assert!(range.max >= range.min);
    }

    #[test]
    fn near_peg_series_are_stablecoins(
        prices in prop::collection::vec(0.995f64..1.005, 2..32)
    ) {
        let range = PriceRange::from_prices(&prices).expect("valid prices");
        prop_assert!(range.is_stablecoin);
        prop_assert_eq!(range.min, 0.995);
        prop_assert_eq!(range.max, 1.005);
    }

    #[test]
    fn plotted_points_stay_inside_plot_area(
        prices in prop::collection::vec(0.0001f64..100_000.0, 1..48),
        width in 300u32..1_600,
        height in 200u32..900
    ) {
        let timestamps = (0..prices.len()).map(|i| format!("D{i}")).collect();
        let history = PriceHistory::new(timestamps, prices).expect("valid history");
        let input = ChartFrameInput {
            history: &history,
            series_label: "Prop",
            theme: Theme::Light,
            hover_index: None,
            style: ChartStyle::default(),
            scale_tuning: ScaleTuning::default(),
        };
        let chart = build_chart_frame(input, Viewport::new(width, height), &NullRenderer::default())
            .expect("frame");
        let plot = chart.layout.plot;

        prop_assert_eq!(chart.points.len(), history.len());
        for point in &chart.points {
            prop_assert!(point.x.is_finite() && point.y.is_finite());
            prop_assert!(point.x >= plot.left - 1e-9 && point.x <= plot.right() + 1e-9);
            // The fixed stablecoin band may clip samples outside 0.995..1.005.
            if !chart.price_range.is_stablecoin {
                prop_assert!(point.y >= plot.top - 1e-9 && point.y <= plot.bottom() + 1e-9);
            }
        }
        for pair in chart.points.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn located_point_is_a_nearest_one(
        coords in prop::collection::vec((0.0f64..500.0, 0.0f64..500.0), 1..32),
        pointer_x in 0.0f64..500.0,
        pointer_y in 0.0f64..500.0
    ) {
        let points: Vec<PlotPoint> = coords.iter().map(|(x, y)| PlotPoint::new(*x, *y)).collect();
        let pointer = PlotPoint::new(pointer_x, pointer_y);

        match locate_nearest_point(pointer, &points, 400.0) {
            Some(index) => {
                let best = points[index].distance_sq(pointer);
                prop_assert!(best < 400.0);
                prop_assert!(points.iter().all(|p| p.distance_sq(pointer) >= best));
                prop_assert!(points[..index].iter().all(|p| p.distance_sq(pointer) > best));
            }
            None => {
                prop_assert!(points.iter().all(|p| p.distance_sq(pointer) >= 400.0));
            }
        }
    }
}
