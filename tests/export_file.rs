use forecast_chart_wasm::application::{ExportFile, export_file_name};
use forecast_chart_wasm::domain::forecast::{ForecastSeries, Symbol};
use serde_json::json;

#[test]
fn named_after_lowercased_symbol() {
    assert_eq!(export_file_name(&Symbol::new("BTC-USD").unwrap()), "btc-usd_analysis.json");
    assert_eq!(export_file_name(&Symbol::new("petr4.sa").unwrap()), "petr4.sa_analysis.json");
}

#[test]
fn contents_are_the_pretty_printed_raw_response() {
    let raw = json!([{"time": "2024-01-01", "price": 100}]);
    let series = ForecastSeries::from_response(Symbol::new("BTC-USD").unwrap(), raw);
    let file = ExportFile::from_series(&series).unwrap();

    assert_eq!(file.name, "btc-usd_analysis.json");
    assert_eq!(file.mime_type, "application/json");
    assert_eq!(
        file.contents,
        "[\n  {\n    \"time\": \"2024-01-01\",\n    \"price\": 100\n  }\n]"
    );
}

#[test]
fn export_keeps_fields_the_chart_ignores_in_server_order() {
    let body = r#"[{"time":"2024-01-02","price":101.5,"upper":110,"lower":95.25},{"time":"2024-01-03","price":"102"}]"#;
    let raw: serde_json::Value = serde_json::from_str(body).unwrap();
    let series = ForecastSeries::from_response(Symbol::new("ETH-USD").unwrap(), raw.clone());
    let file = ExportFile::from_series(&series).unwrap();

    let reparsed: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
    assert_eq!(reparsed, raw);
    let upper = file.contents.find("\"upper\"").unwrap();
    let lower = file.contents.find("\"lower\"").unwrap();
    assert!(upper < lower, "keys must keep server order");
}
