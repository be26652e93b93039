use crate::batch::{BatchFetcher, BatchReport};
use crate::config::Config;
use crate::key_source::{FileKeySource, KeySource};
use crate::{Error, Result};
use sol_accounts_core::retry::Retry;
use sol_accounts_core::sol_client::{FetchAccount, SolClient};
use sol_accounts_core::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

pub struct Poller<S, C> {
    key_source: S,
    batch_fetcher: BatchFetcher<C>,
    iteration_delay: Duration,
    iteration: u64,
}

impl Poller<FileKeySource, SolClient> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = Transport::new(config.transport).map_err(Error::CreateTransport)?;
        let client = SolClient::new(Arc::new(transport), config.fetch.rpc_url.clone())
            .with_commitment(config.fetch.commitment);

        let batch_fetcher = BatchFetcher::new(
            client,
            Retry::new(config.retry),
            config.fetch.batch_size,
            config.fetch.batch_mode,
        )?;

        Ok(Self::new(
            FileKeySource::new(config.fetch.key_file.clone()),
            batch_fetcher,
            Duration::from_millis(config.fetch.iteration_delay_ms),
        ))
    }
}

impl<S: KeySource, C: FetchAccount> Poller<S, C> {
    pub fn new(key_source: S, batch_fetcher: BatchFetcher<C>, iteration_delay: Duration) -> Self {
        Self {
            key_source,
            batch_fetcher,
            iteration_delay,
            iteration: 0,
        }
    }

    pub fn batch_fetcher(&self) -> &BatchFetcher<C> {
        &self.batch_fetcher
    }

    /// Loads the key list once and fetches all of it.
    pub async fn poll_once(&mut self) -> Result<Vec<BatchReport>> {
        self.iteration += 1;

        let keys = self.key_source.load_keys().await?;

        log::debug!(
            "iteration {}: fetching {} accounts",
            self.iteration,
            keys.len()
        );

        self.batch_fetcher.fetch_all(&keys).await
    }

    /// Polls forever. Only returns when loading keys fails or an account
    /// can't be fetched after retrying.
    pub async fn run(mut self) -> Result<()> {
        loop {
            self.poll_once().await?;

            if !self.iteration_delay.is_zero() {
                tokio::time::sleep(self.iteration_delay).await;
            }
        }
    }
}
