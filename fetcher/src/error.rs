use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to read key file {0:?}:\n{1}")]
    ReadKeyFile(PathBuf, io::Error),
    #[error("failed to fetch account {key} in batch {}:\n{source}", .batch + 1)]
    FetchAccount {
        batch: usize,
        key: String,
        source: sol_accounts_core::Error,
    },
    #[error("failed to create solana rpc transport:\n{0}")]
    CreateTransport(sol_accounts_core::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = StdResult<T, Error>;
