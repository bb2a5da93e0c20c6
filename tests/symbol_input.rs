use forecast_chart_wasm::domain::forecast::{Symbol, normalize_symbol_input};
use quickcheck_macros::quickcheck;

#[test]
fn typing_is_reflected_uppercase() {
    assert_eq!(normalize_symbol_input("btc-usd"), "BTC-USD");
    assert_eq!(normalize_symbol_input("Petr4"), "PETR4");
    assert_eq!(normalize_symbol_input(""), "");
}

#[test]
fn whitespace_is_not_trimmed() {
    assert_eq!(Symbol::new(" a ").unwrap().value(), " A ");
}

#[quickcheck]
fn normalization_is_idempotent(raw: String) -> bool {
    let once = normalize_symbol_input(&raw);
    normalize_symbol_input(&once) == once
}

#[quickcheck]
fn only_empty_input_is_rejected(raw: String) -> bool {
    Symbol::new(&raw).is_err() == raw.is_empty()
}
