//! Retry with exponential backoff for the Tour API client.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors: network-level failures and HTTP 5xx. Client errors
//! (4xx), parse failures, and upstream result-code errors are returned
//! immediately without any retry. There is deliberately no jitter, so
//! concurrent branches that fail together also retry together.

use std::future::Future;
use std::time::Duration;

use crate::error::{ErrorKind, TourApiError};

/// Bounds and pacing for one logical call. Never shared across calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure.
    pub max_retries: u32,
    /// Base delay for exponential backoff: `base_delay_ms * 2^attempt`.
    pub base_delay_ms: u64,
    /// Ceiling applied to the computed delay.
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// Delay in milliseconds before the retry that follows 0-based `attempt`:
    /// `min(base_delay_ms * 2^attempt, max_delay_ms)`.
    pub(crate) fn delay_ms_for_attempt(self, attempt: u32) -> u64 {
        self.base_delay_ms
            .saturating_mul(1u64 << attempt.min(62))
            .min(self.max_delay_ms)
    }
}

/// Returns `true` for failures plausibly transient and server-side.
///
/// **Retriable:** network-level failures, and HTTP statuses >= 500.
///
/// **Not retriable:** other HTTP statuses (the request itself is wrong),
/// parse failures, and upstream result-code errors (a request or
/// configuration defect, not transience).
fn is_retriable(err: &TourApiError) -> bool {
    match err.kind() {
        ErrorKind::Network => true,
        ErrorKind::ApiStatus => err.status_code().is_some_and(|status| status >= 500),
        ErrorKind::Parse | ErrorKind::Unknown => false,
    }
}

/// Runs `operation` with up to `policy.max_retries` additional attempts on
/// transient errors.
///
/// # Backoff schedule (defaults: base 1000ms, cap 10000ms)
///
/// | Attempt | Sleep before next attempt |
/// |---------|---------------------------|
/// | 0 (initial) | — |
/// | 1 (first retry) | 1000 ms |
/// | 2 (second retry) | 2000 ms |
/// | 3 (third retry) | 4000 ms |
///
/// With `max_retries = 3` the operation runs at most 4 times total. The
/// bound is enforced by an explicit loop, not recursion; the exhausted
/// attempt's classified error is returned to the caller.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, TourApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TourApiError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_retries {
                    return Err(err);
                }
                let delay_ms = policy.delay_ms_for_attempt(attempt);
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "transient Tour API error — retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
        }
    }
}
