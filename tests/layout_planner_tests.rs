use coin_chart::ChartError;
use coin_chart::api::price_format::format_axis_price;
use coin_chart::core::{MarginPolicy, PriceRange, Viewport, plan_layout, price_ticks};

fn measure_by_chars(label: &str) -> f64 {
    label.chars().count() as f64 * 5.0
}

#[test]
fn left_margin_is_widest_label_plus_padding() {
    let range = PriceRange::from_prices(&[10.0, 12_345.0]).expect("valid prices");
    let ticks = price_ticks(range, format_axis_price);
    assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("$12,345.00"));

    let layout = plan_layout(
        Viewport::new(800, 400),
        ticks,
        MarginPolicy::default(),
        measure_by_chars,
    )
    .expect("layout");

    assert_eq!(layout.margins.left, 10.0 * 5.0 + 20.0);
    assert_eq!(layout.margins.top, 50.0);
    assert_eq!(layout.margins.bottom, 50.0);
    assert_eq!(layout.margins.right, 20.0);
    assert_eq!(layout.plot.left, 70.0);
    assert_eq!(layout.plot.top, 50.0);
    assert_eq!(layout.plot.width, 800.0 - 70.0 - 20.0);
    assert_eq!(layout.plot.height, 300.0);
}

#[test]
fn stablecoin_ticks_use_three_decimals() {
    let range = PriceRange::from_prices(&[0.999, 1.001]).expect("valid prices");
    let ticks = price_ticks(range, format_axis_price);

    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0].label, "$0.995");
    assert_eq!(ticks[2].label, "$1.000");
    assert_eq!(ticks[4].label, "$1.005");
    for tick in &ticks {
        let decimals = tick.label.split_once('.').map(|(_, d)| d.len());
        assert_eq!(decimals, Some(3), "label {}", tick.label);
    }
}

#[test]
fn surface_smaller_than_margins_is_degenerate() {
    let range = PriceRange::from_prices(&[1.0, 2.0]).expect("valid prices");
    let ticks = price_ticks(range, format_axis_price);

    let err = plan_layout(
        Viewport::new(60, 90),
        ticks,
        MarginPolicy::default(),
        measure_by_chars,
    )
    .expect_err("degenerate layout");
    assert!(matches!(err, ChartError::DegenerateLayout { .. }));
}

#[test]
fn zero_viewport_is_rejected() {
    let range = PriceRange::from_prices(&[1.0, 2.0]).expect("valid prices");
    let ticks = price_ticks(range, format_axis_price);

    let err = plan_layout(
        Viewport::new(0, 300),
        ticks,
        MarginPolicy::default(),
        measure_by_chars,
    )
    .expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}
