//! Bounded retry with a fixed delay
//!
//! Used at startup while the database may still be coming up. The
//! operation runs once, then up to `max_retries` more times with
//! `interval` between attempts.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use backoff::backoff::Constant;
use backoff::future::retry;

/// How many times to retry and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub interval: Duration,
}

impl RetryPolicy {
    /// Total attempts including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Every attempt failed.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Run `operation` until it succeeds or the policy is used up.
///
/// The closure receives the 1-based attempt number. Each failure is
/// logged at `warn`; the last error is returned inside `RetryExhausted`.
pub async fn retry_fixed<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 0;

    let result = retry(Constant::new(policy.interval), || {
        attempt += 1;
        let current = attempt;
        let pending = operation(current);

        async move {
            pending.await.map_err(|error| {
                tracing::warn!(attempt = current, max_attempts, error = %error, "attempt failed");
                if current >= max_attempts {
                    backoff::Error::permanent(error)
                } else {
                    backoff::Error::transient(error)
                }
            })
        }
    })
    .await;

    result.map_err(|last_error| RetryExhausted {
        attempts: attempt,
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            interval: Duration::from_secs(2),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_does_not_sleep() {
        let start = Instant::now();
        let value = retry_fixed(&policy(15), |_| async { Ok::<_, &str>("ready") })
            .await
            .unwrap();

        assert_eq!(value, "ready");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let attempt = retry_fixed(&policy(15), move |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 3 {
                    Err("connection refused")
                } else {
                    Ok(attempt)
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(attempt, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_failure_stops_at_bound() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let start = Instant::now();

        let err = retry_fixed(&policy(15), move |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Err::<(), _>(format!("refused on attempt {attempt}")) }
        })
        .await
        .unwrap_err();

        // 1 initial attempt + 15 retries, with a 2s pause before each retry
        assert_eq!(err.attempts, 16);
        assert_eq!(calls.load(Ordering::SeqCst), 16);
        assert_eq!(err.last_error, "refused on attempt 16");
        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_means_single_attempt() {
        let err = retry_fixed(&policy(0), |_| async { Err::<(), _>("down") })
            .await
            .unwrap_err();
        assert_eq!(err.attempts, 1);
    }
}
