use clap::{Args, Parser, ValueEnum};
use sol_accounts_core::config::{RetryConfig, TransportConfig};
use sol_accounts_core::sol_request::Commitment;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub fetch: FetchConfig,
    #[command(flatten)]
    pub retry: RetryConfig,
    #[command(flatten)]
    pub transport: TransportConfig,
}

impl Config {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Args, Debug, Clone)]
pub struct FetchConfig {
    /// Solana rpc endpoint all requests are sent to
    #[clap(long)]
    pub rpc_url: url::Url,
    /// Commitment level to request account state at.
    /// The node's default is used if unset
    #[clap(long, value_enum)]
    pub commitment: Option<Commitment>,
    /// File with one base58 account key per line. Reread on every iteration
    #[clap(long, default_value = "keys.txt")]
    pub key_file: PathBuf,
    /// Number of accounts fetched concurrently as one batch
    #[clap(long, default_value_t = 100)]
    pub batch_size: usize,
    /// What happens to a batch when one of its accounts can't be fetched
    #[clap(long, value_enum, default_value_t = BatchMode::FailFast)]
    pub batch_mode: BatchMode,
    /// Pause between two passes over the key file in milliseconds
    #[clap(long, default_value_t = 0)]
    pub iteration_delay_ms: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// The first account that fails after retrying aborts the batch and the run
    FailFast,
    /// Wait for every account in the batch, log failures and keep going
    Partial,
}
