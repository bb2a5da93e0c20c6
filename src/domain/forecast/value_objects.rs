use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::{AppError, AppResult};

/// Normalize raw keystrokes the way the symbol field displays them.
///
/// No trimming and no charset checks: the field only ever upper-cases.
pub fn normalize_symbol_input(raw: &str) -> String {
    raw.to_uppercase()
}

/// Value Object - ticker symbol sent to the forecast service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Build a symbol from user input. Only the empty string is rejected.
    pub fn new(raw: &str) -> AppResult<Self> {
        if raw.is_empty() {
            return Err(AppError::Validation("Symbol cannot be empty".to_string()));
        }
        Ok(Self(normalize_symbol_input(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for exported file names
    pub fn file_stem(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<&str> for Symbol {
    type Error = AppError;

    fn try_from(value: &str) -> AppResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Self::new(&value)
    }
}

/// Value Object - one forecast sample as the chart consumes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Categorical X label, kept exactly as the service sent it
    pub time: String,
    pub price: f64,
}

impl ForecastPoint {
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self { time: time.into(), price }
    }

    /// Extract `time`/`price` from one raw response entry.
    ///
    /// Returns `None` when there is no finite price; a missing time
    /// becomes an empty label.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let price = match obj.get("price")? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if !price.is_finite() {
            return None;
        }
        let time = match obj.get("time") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Some(Self { time, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbol_is_uppercased_and_kept_verbatim() {
        let symbol = Symbol::new("btc-usd").unwrap();
        assert_eq!(symbol.value(), "BTC-USD");
        assert_eq!(symbol.file_stem(), "btc-usd");
        assert_eq!(Symbol::new(" petr4 ").unwrap().value(), " PETR4 ");
    }

    #[test]
    fn empty_symbol_is_a_validation_error() {
        assert!(Symbol::new("").unwrap_err().is_validation());
    }

    #[test]
    fn conversions_go_through_validation() {
        assert!(Symbol::try_from("").unwrap_err().is_validation());
        assert_eq!(Symbol::try_from("eth-usd").unwrap().value(), "ETH-USD");
        assert!(serde_json::from_value::<Symbol>(json!("")).is_err());
        assert_eq!(serde_json::from_value::<Symbol>(json!("btc-usd")).unwrap().value(), "BTC-USD");
    }

    #[test]
    fn point_accepts_numeric_strings_and_numeric_times() {
        let p = ForecastPoint::from_value(&json!({"time": 1704067200, "price": "101.5"})).unwrap();
        assert_eq!(p.time, "1704067200");
        assert_eq!(p.price, 101.5);
    }

    #[test]
    fn point_without_price_is_dropped() {
        assert!(ForecastPoint::from_value(&json!({"time": "2024-01-01"})).is_none());
        assert!(ForecastPoint::from_value(&json!({"time": "2024-01-01", "price": null})).is_none());
        assert!(ForecastPoint::from_value(&json!([1, 2])).is_none());
    }
}
