use crate::domain::{
    errors::{AppError, AppResult},
    forecast::{ForecastSeries, Symbol},
};

pub const EXPORT_MIME_TYPE: &str = "application/json";

/// `<lower-cased symbol>_analysis.json`
pub fn export_file_name(symbol: &Symbol) -> String {
    format!("{}_analysis.json", symbol.file_stem())
}

/// File handed to the browser download routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Pretty-print the raw response, two-space indented, keys in server order.
    ///
    /// Refuses series with nothing to chart, matching the disabled button.
    pub fn from_series(series: &ForecastSeries) -> AppResult<Self> {
        if series.is_empty() {
            return Err(AppError::Export(format!("no forecast data for {}", series.symbol())));
        }
        let contents = serde_json::to_string_pretty(series.raw())
            .map_err(|e| AppError::Export(format!("Failed to serialize forecast: {}", e)))?;
        Ok(Self { name: export_file_name(series.symbol()), mime_type: EXPORT_MIME_TYPE, contents })
    }
}
