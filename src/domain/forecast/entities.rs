use serde_json::Value;

use super::value_objects::{ForecastPoint, Symbol};

/// Entity - forecast returned for one symbol.
///
/// Keeps the raw body untouched for export next to the chart-reduced
/// points. Order is the server's order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    symbol: Symbol,
    raw: Value,
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Any body that is not a JSON array yields an empty series
    pub fn from_response(symbol: Symbol, raw: Value) -> Self {
        let points = raw
            .as_array()
            .map(|entries| entries.iter().filter_map(ForecastPoint::from_value).collect())
            .unwrap_or_default();
        Self { symbol, raw, points }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) over all prices
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.price);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
