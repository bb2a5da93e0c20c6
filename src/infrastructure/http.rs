use gloo::net::http::Request;
use serde_json::Value;

use crate::application::ForecastSource;
use crate::domain::{
    errors::{AppError, AppResult},
    forecast::Symbol,
    logging::{LogComponent, get_logger},
};

/// HTTP клиент для сервиса прогнозов на основе gloo
#[derive(Debug, Clone)]
pub struct ForecastHttpClient {
    endpoint: String,
}

impl ForecastHttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// `<endpoint>?quote=<SYMBOL>`; the browser applies its default encoding
    pub fn quote_url(&self, symbol: &Symbol) -> String {
        format!("{}?quote={}", self.endpoint, symbol.value())
    }
}

/// `message` of an error body, if the body is a JSON object carrying one
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

/// Parse a 2xx body, preserving key order for export
pub fn parse_forecast_body(body: &str) -> AppResult<Value> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("Failed to parse forecast JSON: {}", e)))
}

impl ForecastSource for ForecastHttpClient {
    async fn fetch(&self, symbol: &Symbol) -> AppResult<Value> {
        let url = self.quote_url(symbol);
        get_logger().info(
            LogComponent::Infrastructure("ForecastHttpClient"),
            &format!("📡 GET {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {:?}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {:?}", e)))?;

        if !response.ok() {
            let message = extract_error_message(&body);
            get_logger().log_with_metadata(
                crate::domain::logging::LogLevel::Error,
                LogComponent::Infrastructure("ForecastHttpClient"),
                &format!("❌ HTTP {} - {}", status, response.status_text()),
                &body,
            );
            return Err(AppError::Http { status, message });
        }

        let data = parse_forecast_body(&body)?;
        get_logger().debug(
            LogComponent::Infrastructure("ForecastHttpClient"),
            &format!("✅ {} bytes for {}", body.len(), symbol),
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_url_uses_symbol_verbatim() {
        let client = ForecastHttpClient::new("https://forecast.example/v1/ticket");
        assert_eq!(
            client.quote_url(&Symbol::new("btc-usd").unwrap()),
            "https://forecast.example/v1/ticket?quote=BTC-USD"
        );
    }

    #[test]
    fn error_message_only_from_string_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Ticker not found"}"#).as_deref(),
            Some("Ticker not found")
        );
        assert_eq!(extract_error_message(r#"{"message":42}"#), None);
        assert_eq!(extract_error_message("<html>502</html>"), None);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(parse_forecast_body("not json"), Err(AppError::Decode(_))));
    }
}
