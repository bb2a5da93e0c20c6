use std::future::Future;

use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::{log_info, log_warn};

/// Fixed retry schedule for forecast requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub retries: u32,
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { retries: 1, delay_ms: 1000 }
    }
}

impl RetryPolicy {
    pub fn new(retries: u32, delay_ms: u32) -> Self {
        Self { retries, delay_ms }
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries + 1
    }
}

/// Suspends the current task between attempts
pub trait Delay {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Run `op` until it succeeds or the policy is exhausted.
/// The last error is returned unchanged.
pub async fn run_with_retry<T, F, Fut, D>(policy: RetryPolicy, delay: &D, mut op: F) -> AppResult<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AppResult<T>>,
    D: Delay,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    log_info!(
                        LogComponent::Application("Retry"),
                        "✅ Attempt {}/{} succeeded",
                        attempt,
                        policy.max_attempts()
                    );
                }
                return Ok(value);
            }
            Err(err) if attempt < policy.max_attempts() => {
                log_warn!(
                    LogComponent::Application("Retry"),
                    "🔄 Attempt {}/{} failed: {}; retrying in {}ms",
                    attempt,
                    policy.max_attempts(),
                    err,
                    policy.delay_ms
                );
                delay.sleep(policy.delay_ms).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
