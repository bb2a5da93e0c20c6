use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Forecast service used when `FORECAST_ENDPOINT` is not set at build time
pub const DEFAULT_ENDPOINT: &str = "https://computress.up.railway.app/v1/ticket";

/// Runtime settings for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: String,
    /// Automatic retries after the first failed attempt
    pub retry_count: u32,
    pub retry_delay_ms: u32,
    pub toast_timeout_ms: u32,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_count: 1,
            retry_delay_ms: 1000,
            toast_timeout_ms: 5000,
            chart_width: 800,
            chart_height: 400,
        }
    }
}

impl AppConfig {
    /// Defaults, with the endpoint overridable at compile time
    pub fn from_build_env() -> Self {
        Self::with_endpoint(option_env!("FORECAST_ENDPOINT"))
    }

    fn with_endpoint(endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint.to_string();
        }
        config
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Install the configuration. Later calls are ignored.
pub fn init_config(config: AppConfig) {
    let _ = CONFIG.set(config);
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_build_env)
}
