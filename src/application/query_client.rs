use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use super::retry::{Delay, RetryPolicy, run_with_retry};
use crate::domain::{
    errors::AppResult,
    forecast::{ForecastSeries, QueryState, Symbol},
    logging::LogComponent,
};
use crate::{log_debug, log_info, log_warn};

/// Where forecast bodies come from. The HTTP client in production,
/// scripted responses in tests.
pub trait ForecastSource {
    /// One attempt: resolves to the parsed 2xx body
    fn fetch(&self, symbol: &Symbol) -> impl Future<Output = AppResult<Value>>;
}

/// Forecast query runner with a per-symbol memo of the last settled state.
///
/// Requests are never cancelled. Each symbol is resolved independently, so
/// overlapping requests all settle and whichever settles last is what the
/// caller sees last.
pub struct QueryClient<S, D> {
    source: S,
    delay: D,
    policy: RetryPolicy,
    cache: RefCell<HashMap<Symbol, QueryState>>,
}

impl<S: ForecastSource, D: Delay> QueryClient<S, D> {
    pub fn new(source: S, delay: D, policy: RetryPolicy) -> Self {
        Self { source, delay, policy, cache: RefCell::new(HashMap::new()) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate the input and mark its query as loading.
    ///
    /// An empty input is rejected without touching the cache.
    pub fn begin(&self, input: &str) -> AppResult<Symbol> {
        let symbol = Symbol::new(input).inspect_err(|_| {
            log_warn!(LogComponent::Application("QueryClient"), "⚠️ Analyze requested with empty symbol");
        })?;
        self.cache.borrow_mut().insert(symbol.clone(), QueryState::Loading);
        log_debug!(LogComponent::Application("QueryClient"), "⏳ {} -> loading", symbol);
        Ok(symbol)
    }

    /// Fetch with retries, store the settled state and return it
    pub async fn resolve(&self, symbol: &Symbol) -> QueryState {
        let result = run_with_retry(self.policy, &self.delay, |attempt| {
            log_debug!(
                LogComponent::Application("QueryClient"),
                "📡 {} attempt {}/{}",
                symbol,
                attempt,
                self.policy.max_attempts()
            );
            self.source.fetch(symbol)
        })
        .await
        .map(|body| ForecastSeries::from_response(symbol.clone(), body));

        match &result {
            Ok(series) => {
                log_info!(
                    LogComponent::Application("QueryClient"),
                    "✅ {} settled with {} points",
                    symbol,
                    series.len()
                );
            }
            Err(err) => {
                log_warn!(
                    LogComponent::Application("QueryClient"),
                    "❌ {} settled with error: {}",
                    symbol,
                    err
                );
            }
        }

        let state = QueryState::settled(result);
        self.cache.borrow_mut().insert(symbol.clone(), state.clone());
        state
    }

    /// `begin` + `resolve`. `on_change` sees the memo entry for the symbol
    /// after each transition: loading first, then the settled state.
    pub async fn analyze<F>(&self, input: &str, mut on_change: F) -> AppResult<QueryState>
    where
        F: FnMut(&Symbol, &QueryState),
    {
        let symbol = self.begin(input)?;
        on_change(&symbol, &self.cached(&symbol));
        let state = self.resolve(&symbol).await;
        on_change(&symbol, &self.cached(&symbol));
        Ok(state)
    }

    /// Last known state for `symbol`, `Idle` if never requested
    pub fn cached(&self, symbol: &Symbol) -> QueryState {
        self.cache.borrow().get(symbol).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AppError;
    use crate::domain::forecast::QueryStatus;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    struct Instant;
    impl Delay for Instant {
        async fn sleep(&self, _ms: u32) {}
    }

    struct Counting {
        calls: Cell<u32>,
        body: AppResult<Value>,
    }

    impl ForecastSource for Counting {
        async fn fetch(&self, _symbol: &Symbol) -> AppResult<Value> {
            self.calls.set(self.calls.get() + 1);
            self.body.clone()
        }
    }

    fn client(body: AppResult<Value>) -> QueryClient<Counting, Instant> {
        QueryClient::new(Counting { calls: Cell::new(0), body }, Instant, RetryPolicy::default())
    }

    #[test]
    fn empty_input_never_fetches() {
        let client = client(Ok(json!([])));
        let result = block_on(client.analyze("", |_, _| panic!("no transition expected")));
        assert!(result.unwrap_err().is_validation());
        assert_eq!(client.source().calls.get(), 0);
    }

    #[test]
    fn transitions_loading_then_success() {
        let client = client(Ok(json!([{"time": "2024-01-01", "price": 100}])));
        let mut seen = Vec::new();
        let state = block_on(client.analyze("btc-usd", |s, st| seen.push((s.to_string(), st.status()))))
            .unwrap();
        assert_eq!(state.chart_series().map(|s| s.len()), Some(1));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("BTC-USD".to_string(), QueryStatus::Loading));
        assert_eq!(seen[1], ("BTC-USD".to_string(), QueryStatus::Success));
        assert!(client.cached(&Symbol::new("BTC-USD").unwrap()).can_download());
    }

    #[test]
    fn failure_is_cached_after_retry() {
        let client = client(Err(AppError::Http { status: 500, message: None }));
        let state = block_on(client.analyze("PETR4", |_, _| {})).unwrap();
        assert_eq!(client.source().calls.get(), 2);
        assert!(state.error_message().is_some());
        assert_eq!(client.cached(&Symbol::new("PETR4").unwrap()), state);
    }
}
