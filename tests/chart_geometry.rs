use forecast_chart_wasm::domain::forecast::ForecastPoint;
use forecast_chart_wasm::infrastructure::rendering::{
    LineChartGeometry, Margin, PriceAxis, line_chart::label_stride, tooltip_text,
};
use insta::assert_json_snapshot;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;

fn series(prices: &[f64]) -> Vec<ForecastPoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| ForecastPoint::new(format!("2024-01-{:02}", i + 1), p))
        .collect()
}

#[test]
fn empty_series_has_no_geometry() {
    assert!(LineChartGeometry::compute(&[], WIDTH, HEIGHT, Margin::default()).is_none());
}

#[test]
fn tiny_canvas_has_no_geometry() {
    assert!(LineChartGeometry::compute(&series(&[1.0]), 50.0, 30.0, Margin::default()).is_none());
}

#[test]
fn y_axis_rounds_outward_to_nice_ticks() {
    let geometry =
        LineChartGeometry::compute(&series(&[100.0, 120.0, 90.0]), WIDTH, HEIGHT, Margin::default())
            .unwrap();
    let labels: Vec<&str> = geometry.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_json_snapshot!(labels, @r#"
    [
      "90",
      "100",
      "110",
      "120"
    ]
    "#);
}

#[test]
fn fractional_prices_get_decimal_labels() {
    let axis = PriceAxis::auto(0.12, 0.19, 5);
    let label = axis.label(axis.min);
    assert_eq!(label.split('.').nth(1).map(str::len), Some(2), "label {label}");
    assert!(axis.min <= 0.12 && axis.max >= 0.19);
    assert!(axis.ticks.iter().all(|t| *t >= axis.min && *t <= axis.max));
}

#[test]
fn points_stay_inside_plot_and_keep_order() {
    let geometry = LineChartGeometry::compute(
        &series(&[10.0, 12.5, 11.0, 15.0, 9.5]),
        WIDTH,
        HEIGHT,
        Margin::default(),
    )
    .unwrap();
    let plot = geometry.plot;
    for window in geometry.points.windows(2) {
        assert!(window[0].0 < window[1].0);
    }
    for &(x, y) in &geometry.points {
        assert!(x >= plot.left && x <= plot.right());
        assert!(y >= plot.top && y <= plot.bottom());
    }
    assert_eq!(geometry.points.first().unwrap().0, plot.left);
    assert_eq!(geometry.points.last().unwrap().0, plot.right());
}

#[test]
fn hovering_a_point_selects_it() {
    for n in [1usize, 2, 5, 30] {
        let prices: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        let geometry =
            LineChartGeometry::compute(&series(&prices), WIDTH, HEIGHT, Margin::default()).unwrap();
        for (i, &(x, _)) in geometry.points.iter().enumerate() {
            assert_eq!(geometry.hover_index(x), Some(i), "n={n}, i={i}");
        }
        assert_eq!(geometry.hover_index(geometry.plot.left - 1.0), None);
        assert_eq!(geometry.hover_index(geometry.plot.right() + 1.0), None);
    }
}

#[test]
fn x_labels_are_thinned_on_long_series() {
    let prices: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let geometry =
        LineChartGeometry::compute(&series(&prices), WIDTH, HEIGHT, Margin::default()).unwrap();
    let stride = label_stride(30, geometry.plot.width);
    assert!(stride > 1);
    assert_eq!(geometry.x_ticks.len(), 30usize.div_ceil(stride));
    assert_eq!(geometry.x_ticks[0].label, "2024-01-01");
    assert_eq!(geometry.x_ticks[1].index, stride);
}

#[test]
fn tooltip_shows_time_and_price() {
    assert_eq!(tooltip_text(&ForecastPoint::new("2024-01-01", 100.0)), "2024-01-01\nprice : 100");
    assert_eq!(tooltip_text(&ForecastPoint::new("2024-01-02", 101.25)), "2024-01-02\nprice : 101.25");
}

#[quickcheck]
fn auto_domain_covers_data(a: i32, b: i32) -> TestResult {
    let (lo, hi) = (a.min(b) as f64 / 100.0, a.max(b) as f64 / 100.0);
    let axis = PriceAxis::auto(lo, hi, 5);
    let slack = axis.step * 1e-3;
    if !axis.step.is_finite() || axis.step <= 0.0 {
        return TestResult::failed();
    }
    TestResult::from_bool(
        axis.min <= lo + slack && axis.max >= hi - slack && axis.ticks.len() >= 2,
    )
}

#[test]
fn float_noise_series_projects_inside_plot() {
    let geometry = LineChartGeometry::compute(
        &series(&[100.0, 100.00000000000001, 100.0]),
        WIDTH,
        HEIGHT,
        Margin::default(),
    )
    .unwrap();
    let plot = geometry.plot;
    for &(x, y) in &geometry.points {
        assert!(x.is_finite() && y.is_finite(), "({x}, {y})");
        assert!(y >= plot.top && y <= plot.bottom());
    }
    assert!(geometry.y_ticks.iter().all(|t| t.y.is_finite()));
}

#[quickcheck]
fn near_flat_series_stay_finite(cents: i32, ulps: u8) -> bool {
    let lo = cents as f64 / 100.0;
    let hi = lo + lo.abs().max(1.0) * f64::EPSILON * ulps as f64;
    let Some(geometry) =
        LineChartGeometry::compute(&series(&[lo, hi]), WIDTH, HEIGHT, Margin::default())
    else {
        return false;
    };
    geometry.axis.span() > 0.0
        && geometry
            .points
            .iter()
            .all(|&(x, y)| x.is_finite() && y.is_finite() && y >= geometry.plot.top && y <= geometry.plot.bottom())
}
