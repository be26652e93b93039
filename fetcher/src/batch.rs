use crate::config::BatchMode;
use crate::{Error, Result};
use sol_accounts_core::retry::Retry;
use sol_accounts_core::sol_client::FetchAccount;
use sol_accounts_core::types::AccountInfo;

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Outcome of one settled batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Zero based position of the batch in the key list
    pub index: usize,
    /// Accounts that were fetched, including the ones that don't exist
    pub fetched: usize,
    /// Fetched keys the node had no account for
    pub missing: usize,
    /// Keys that still failed after retrying. Always 0 in fail-fast mode
    pub failed: usize,
}

pub struct BatchFetcher<C> {
    client: C,
    retry: Retry,
    batch_size: usize,
    mode: BatchMode,
}

impl<C: FetchAccount> BatchFetcher<C> {
    pub fn new(client: C, retry: Retry, batch_size: usize, mode: BatchMode) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be greater than 0"));
        }

        Ok(Self {
            client,
            retry,
            batch_size,
            mode,
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches every key, one batch at a time. Keys inside a batch are
    /// fetched concurrently and the next batch starts only after all of
    /// them settled.
    pub async fn fetch_all(&self, keys: &[String]) -> Result<Vec<BatchReport>> {
        let mut reports = Vec::with_capacity(num_batches(keys.len(), self.batch_size));

        for (index, batch) in keys.chunks(self.batch_size).enumerate() {
            let report = match self.mode {
                BatchMode::FailFast => self.fetch_batch(index, batch).await?,
                BatchMode::Partial => self.fetch_batch_partial(index, batch).await,
            };
            reports.push(report);
        }

        Ok(reports)
    }

    async fn fetch_batch(&self, index: usize, batch: &[String]) -> Result<BatchReport> {
        let fetches = batch.iter().map(|key| self.fetch_one(index, key));
        let accounts = futures::future::try_join_all(fetches).await?;

        log::info!("batch {}: fetched {} accounts", index + 1, accounts.len());

        Ok(BatchReport {
            index,
            fetched: accounts.len(),
            missing: accounts.iter().filter(|a| a.is_none()).count(),
            failed: 0,
        })
    }

    async fn fetch_batch_partial(&self, index: usize, batch: &[String]) -> BatchReport {
        let fetches = batch.iter().map(|key| self.fetch_one(index, key));
        let results = futures::future::join_all(fetches).await;

        let mut report = BatchReport {
            index,
            fetched: 0,
            missing: 0,
            failed: 0,
        };

        for res in results {
            match res {
                Ok(account) => {
                    report.fetched += 1;
                    if account.is_none() {
                        report.missing += 1;
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    report.failed += 1;
                }
            }
        }

        log::info!(
            "batch {}: fetched {} accounts, {} failed",
            index + 1,
            report.fetched,
            report.failed
        );

        report
    }

    async fn fetch_one(&self, batch: usize, key: &str) -> Result<Option<AccountInfo>> {
        self.retry
            .retry(|| self.client.fetch_account(key))
            .await
            .map_err(|source| Error::FetchAccount {
                batch,
                key: key.to_owned(),
                source,
            })
    }
}

pub fn num_batches(num_keys: usize, batch_size: usize) -> usize {
    num_keys.div_ceil(batch_size)
}
