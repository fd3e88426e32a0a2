//! Bounded linear-backoff retry for idempotent lookups
//!
//! Only read-only operations go through this: the session establishment
//! stages are never auto-retried, because replaying them could create
//! duplicate customers or sessions.

use std::future::Future;
use std::time::Duration;

use crate::error::{CheckInError, CheckInResult};

/// Retry policy with linear backoff (`step`, `2*step`, `3*step`, ...)
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Base delay between attempts
    pub step: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, step: Duration) -> Self {
        Self { max_retries, step }
    }

    /// Run `op`, retrying transient failures up to the bound.
    ///
    /// Non-transient errors (out-of-zone, invalid payload, API rejections)
    /// are returned immediately; only transport failures are worth a
    /// second attempt.
    pub async fn run<T, F, Fut>(&self, op_name: &str, mut op: F) -> CheckInResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = CheckInResult<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_retries && is_transient(&err) => {
                    attempt += 1;
                    let delay = self.step * attempt;
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "{op_name} failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(500))
    }
}

fn is_transient(err: &CheckInError) -> bool {
    matches!(err, CheckInError::Network(_))
}
