use crate::config::{RetryConfig, RetryOn};
use crate::error::Classify;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct Retry {
    max_retries: usize,
    millis_between_tries: u64,
    retry_on: RetryOn,
}

impl Retry {
    pub fn new(cfg: RetryConfig) -> Self {
        Self {
            max_retries: cfg.max_retries,
            millis_between_tries: cfg.millis_between_tries,
            retry_on: cfg.retry_on,
        }
    }

    /// Runs `action` until it succeeds or `max_retries` retries have failed.
    /// The error of the last attempt is returned as is.
    pub async fn retry<F, T, Fut, E>(&self, mut action: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display + Classify,
    {
        let mut retry_count = 0;
        loop {
            match action().await {
                Ok(r) => return Ok(r),
                Err(e) => {
                    if retry_count >= self.max_retries || !self.should_retry(&e) {
                        return Err(e);
                    }
                    retry_count += 1;
                    log::warn!(
                        "request failed (attempt {} of {}), retrying: {}",
                        retry_count,
                        self.max_retries,
                        e
                    );
                    tokio::time::sleep(Duration::from_millis(self.millis_between_tries)).await;
                }
            }
        }
    }

    fn should_retry<E: Classify>(&self, err: &E) -> bool {
        match self.retry_on {
            RetryOn::AnyError => true,
            RetryOn::TransientOnly => err.is_retryable(),
        }
    }
}
