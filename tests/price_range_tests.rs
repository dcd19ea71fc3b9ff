use approx::assert_relative_eq;
use coin_chart::ChartError;
use coin_chart::core::{PriceRange, ScaleTuning};

#[test]
fn stablecoin_series_uses_fixed_band() {
    let range = PriceRange::from_prices(&[0.999, 1.001, 1.0]).expect("valid prices");

    assert!(range.is_stablecoin);
    assert_relative_eq!(range.min, 0.995);
    assert_relative_eq!(range.max, 1.005);
    assert_relative_eq!(range.range, 0.01, epsilon = 1e-12);
}

#[test]
fn regular_series_uses_data_extremes() {
    let range = PriceRange::from_prices(&[10.0, 20.0, 15.0]).expect("valid prices");

    assert!(!range.is_stablecoin);
    assert_eq!(range.min, 10.0);
    assert_eq!(range.max, 20.0);
    assert_eq!(range.range, 10.0);
}

#[test]
fn single_sample_skips_stablecoin_check() {
    let range = PriceRange::from_prices(&[1.0]).expect("valid prices");

    assert!(!range.is_stablecoin);
    assert_eq!(range.min, 1.0);
    assert_eq!(range.max, 1.0);
    assert_relative_eq!(range.range, 0.001);
}

#[test]
fn flat_series_gets_minimum_span() {
    let range = PriceRange::from_prices(&[5.0, 5.0, 5.0]).expect("valid prices");

    assert!(!range.is_stablecoin);
    assert_relative_eq!(range.range, 0.001);
}

#[test]
fn spread_at_threshold_is_not_stablecoin() {
    let range = PriceRange::from_prices(&[0.99, 1.01]).expect("valid prices");
    assert!(!range.is_stablecoin);
}

#[test]
fn mean_outside_peg_band_is_not_stablecoin() {
    let range = PriceRange::from_prices(&[1.021, 1.025]).expect("valid prices");
    assert!(!range.is_stablecoin);
    assert_relative_eq!(range.range, 0.004, epsilon = 1e-12);
}

#[test]
fn empty_and_non_finite_prices_are_rejected() {
    let err = PriceRange::from_prices(&[]).expect_err("empty must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PriceRange::from_prices(&[1.0, f64::NAN]).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PriceRange::from_prices(&[f64::NAN, 10.0, 20.0]).expect_err("leading nan");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PriceRange::from_prices(&[10.0, f64::INFINITY]).expect_err("infinite");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn tuned_thresholds_change_classification() {
    let tuning = ScaleTuning {
        stablecoin_max_spread: 0.5,
        stablecoin_mean_low: 0.5,
        stablecoin_mean_high: 1.5,
        ..ScaleTuning::default()
    };
    let range = PriceRange::from_prices_tuned(&[0.8, 1.2], tuning).expect("valid prices");
    assert!(range.is_stablecoin);
}

#[test]
fn tick_values_are_evenly_spaced_from_min() {
    let range = PriceRange::from_prices(&[100.0, 200.0]).expect("valid prices");

    let ticks: Vec<f64> = (0..5).map(|step| range.tick_value(step, 5)).collect();
    assert_eq!(ticks, vec![100.0, 125.0, 150.0, 175.0, 200.0]);
}

#[test]
fn invalid_tuning_is_rejected() {
    let tuning = ScaleTuning {
        min_span_absolute: 0.0,
        ..ScaleTuning::default()
    };
    assert!(tuning.validate().is_err());
}
