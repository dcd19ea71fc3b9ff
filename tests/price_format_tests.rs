use coin_chart::api::price_format::{
    format_axis_price, format_chart_title, format_currency, format_grouped,
    format_percentage_change, format_price, format_tooltip, truncate_chars,
};

#[test]
fn table_prices_scale_precision_with_magnitude() {
    assert_eq!(format_price(1234.5678), "$1,234.57");
    assert_eq!(format_price(1.0), "$1.00");
    assert_eq!(format_price(0.1234567), "$0.123457");
    assert_eq!(format_price(0.00000001), "$0.00000001");
    assert_eq!(format_price(0.0), "N/A");
    assert_eq!(format_price(-3.0), "N/A");
}

#[test]
fn market_caps_use_unit_suffixes() {
    assert_eq!(format_currency(1_500_000_000_000.0), "$1.50 T");
    assert_eq!(format_currency(2_500_000_000.0), "$2.50 B");
    assert_eq!(format_currency(3_250_000.0), "$3.25 M");
    assert_eq!(format_currency(999.0), "$999.00");
    assert_eq!(format_currency(0.0), "N/A");
}

#[test]
fn percentage_change_is_signed() {
    assert_eq!(format_percentage_change(Some(1.234)), "+1.23%");
    assert_eq!(format_percentage_change(Some(-0.5)), "-0.50%");
    assert_eq!(format_percentage_change(Some(0.0)), "+0.00%");
    assert_eq!(format_percentage_change(None), "N/A");
}

#[test]
fn axis_prices_depend_on_stablecoin_flag() {
    assert_eq!(format_axis_price(1234.5, false), "$1,234.50");
    assert_eq!(format_axis_price(1.0, true), "$1.000");
    assert_eq!(format_grouped(1_234_567.891, 1), "1,234,567.9");
}

#[test]
fn tooltip_shows_date_and_six_decimal_price() {
    assert_eq!(
        format_tooltip("Jan 01", 100.0),
        "Date: Jan 01\nPrice: $100.000000"
    );
}

#[test]
fn titles_and_labels_truncate_on_char_boundaries() {
    assert_eq!(
        format_chart_title("Bitcoin", false, 50),
        "Bitcoin - 7-Day Price (USD)"
    );
    assert_eq!(format_chart_title("Bitcoin", true, 12), "Bitcoin - 7-");
    assert_eq!(truncate_chars("ÅÄÖ-2024-01-01", 5), "ÅÄÖ-2");
}
