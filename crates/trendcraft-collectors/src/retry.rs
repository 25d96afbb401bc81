//! Retry with exponential back-off and jitter for the platform API clients.

use std::future::Future;
use std::time::Duration;

use trendcraft_core::AppConfig;

use crate::error::CollectorError;

const MAX_DELAY_MS: u64 = 60_000;
const TOO_MANY_REQUESTS: u16 = 429;

/// How many times to retry a transient failure and how long to wait first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        }
    }

    /// No retries; used by tests that expect a single request.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base_ms: 0,
        }
    }
}

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// Timeouts, connection failures, rate limiting (429) and 5xx responses are
/// transient; API error envelopes and malformed bodies are not.
pub(crate) fn is_retriable(err: &CollectorError) -> bool {
    match err {
        CollectorError::Http(e) => {
            e.is_timeout()
                || e.is_connect()
                || e.status().is_some_and(|s| {
                    s.is_server_error() || s.as_u16() == TOO_MANY_REQUESTS
                })
        }
        CollectorError::Status { status, .. } => {
            *status == TOO_MANY_REQUESTS || (500..600).contains(status)
        }
        CollectorError::Api { .. }
        | CollectorError::Deserialize { .. }
        | CollectorError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation`, retrying transient errors up to `policy.max_retries` times.
///
/// The delay before retry `n` is `backoff_base_ms × 2ⁿ⁻¹` with ±25 % jitter,
/// capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, CollectorError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CollectorError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = policy
                    .backoff_base_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "transient collector error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
