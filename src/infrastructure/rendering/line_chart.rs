use crate::domain::forecast::ForecastPoint;

/// Y ticks requested from the nice-number search
pub const Y_TICK_COUNT: usize = 5;
/// Minimum horizontal room for one X label, in pixels
pub const MIN_X_LABEL_SPACING: f64 = 80.0;

/// Margins around the plot area (labels live inside them)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { top: 20.0, right: 30.0, bottom: 40.0, left: 80.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Rounded price domain with evenly spaced ticks
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks: Vec<f64>,
}

/// Largest "nice" step (1, 2, 2.5, 5 x 10^k) covering `raw`
fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Snap float noise like 0.30000000000000004 to the step's precision
fn snap(value: f64, step: f64) -> f64 {
    let decimals = decimals_for(step) as i32;
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Decimal places needed to print multiples of `step` exactly
pub fn decimals_for(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Ranges narrower than this fraction of the price magnitude count as flat
const FLAT_TOLERANCE: f64 = 1e-9;

impl PriceAxis {
    /// Auto domain around `[lo, hi]`, expanded outward to whole steps.
    ///
    /// Always returns `max > min`; a flat or float-noise range is padded.
    pub fn auto(lo: f64, hi: f64, tick_count: usize) -> Self {
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        let magnitude = hi.abs().max(lo.abs()).max(1.0);
        if hi - lo <= magnitude * FLAT_TOLERANCE {
            return Self::padded(lo, hi, tick_count);
        }
        let axis = Self::spanning(lo, hi, tick_count);
        if axis.max > axis.min { axis } else { Self::padded(lo, hi, tick_count) }
    }

    fn padded(lo: f64, hi: f64, tick_count: usize) -> Self {
        let pad = (lo.abs() * 0.05).max(1.0);
        Self::spanning(lo - pad, hi + pad, tick_count)
    }

    fn spanning(lo: f64, hi: f64, tick_count: usize) -> Self {
        let intervals = tick_count.max(2) - 1;
        let step = nice_step((hi - lo) / intervals as f64);
        let min = snap((lo / step).floor() * step, step);
        let max = snap((hi / step).ceil() * step, step);
        let count = ((max - min) / step).round() as usize;
        let ticks = (0..=count).map(|i| snap(min + i as f64 * step, step)).collect();

        Self { min, max, step, ticks }
    }

    /// Height of the domain; positive and finite for any usable axis
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn label(&self, value: f64) -> String {
        format!("{:.*}", decimals_for(self.step), value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XTick {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub y: f64,
    pub label: String,
}

/// Screen-space layout of a single line series
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub axis: PriceAxis,
    /// One (x, y) per forecast point, server order
    pub points: Vec<(f64, f64)>,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
}

impl LineChartGeometry {
    /// `None` for an empty series or a canvas too small for the margins
    pub fn compute(points: &[ForecastPoint], width: f64, height: f64, margin: Margin) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let plot = PlotArea {
            left: margin.left,
            top: margin.top,
            width: width - margin.left - margin.right,
            height: height - margin.top - margin.bottom,
        };
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return None;
        }

        let (lo, hi) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.price), hi.max(p.price)));
        let axis = PriceAxis::auto(lo, hi, Y_TICK_COUNT);
        let span = axis.span();
        if !(span.is_finite() && span > 0.0) {
            return None;
        }

        let project_y = |price: f64| plot.bottom() - (price - axis.min) / span * plot.height;
        let screen: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (category_x(i, points.len(), &plot), project_y(p.price)))
            .collect();

        let stride = label_stride(points.len(), plot.width);
        let x_ticks = (0..points.len())
            .step_by(stride)
            .map(|i| XTick { index: i, x: screen[i].0, label: points[i].time.clone() })
            .collect();
        let y_ticks = axis.ticks.iter().map(|&v| YTick { y: project_y(v), label: axis.label(v) }).collect();

        Some(Self { width, height, plot, axis, points: screen, x_ticks, y_ticks })
    }

    /// Index of the point nearest to `x`, if `x` is over the plot area
    pub fn hover_index(&self, x: f64) -> Option<usize> {
        let n = self.points.len();
        if n == 0 || x < self.plot.left || x > self.plot.right() {
            return None;
        }
        if n == 1 {
            return Some(0);
        }
        let spacing = self.plot.width / (n - 1) as f64;
        let index = ((x - self.plot.left) / spacing).round() as usize;
        Some(index.min(n - 1))
    }
}

/// Point-scale X: first and last category on the plot edges, a lone
/// category centered
pub fn category_x(index: usize, count: usize, plot: &PlotArea) -> f64 {
    if count <= 1 {
        return plot.left + plot.width / 2.0;
    }
    plot.left + index as f64 * plot.width / (count - 1) as f64
}

/// Show every n-th X label so labels keep `MIN_X_LABEL_SPACING` apart
pub fn label_stride(count: usize, plot_width: f64) -> usize {
    let max_labels = ((plot_width / MIN_X_LABEL_SPACING).floor() as usize).max(1);
    count.div_ceil(max_labels).max(1)
}

/// Hover text in the chart tooltip
pub fn tooltip_text(point: &ForecastPoint) -> String {
    format!("{}\nprice : {}", point.time, point.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(17.0), 20.0);
        assert_eq!(nice_step(23.0), 25.0);
        assert!((nice_step(0.04) - 0.05).abs() < 1e-12);
        assert!((nice_step(0.9) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(decimals_for(20.0), 0);
        assert_eq!(decimals_for(2.5), 1);
        assert_eq!(decimals_for(0.05), 2);
    }

    #[test]
    fn flat_series_gets_padded_domain() {
        let axis = PriceAxis::auto(100.0, 100.0, 5);
        assert!(axis.min < 100.0 && axis.max > 100.0);
    }

    #[test]
    fn float_noise_range_is_treated_as_flat() {
        let axis = PriceAxis::auto(100.0, 100.00000000000001, 5);
        assert!(axis.span() > 0.0);
        assert!(axis.min < 100.0 && axis.max > 100.0);
        assert!(axis.ticks.len() >= 2);
    }

    #[test]
    fn single_point_is_centered() {
        let geometry = LineChartGeometry::compute(
            &[ForecastPoint::new("2024-01-01", 100.0)],
            800.0,
            400.0,
            Margin::default(),
        )
        .unwrap();
        assert_eq!(geometry.points.len(), 1);
        assert_eq!(geometry.points[0].0, geometry.plot.left + geometry.plot.width / 2.0);
        assert_eq!(geometry.hover_index(geometry.plot.left + 1.0), Some(0));
    }
}
