use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to parse rpc response:\n{0}")]
    RpcResponseParse(reqwest::Error),
    #[error("failed to parse rpc result:\n{0}")]
    RpcResultParse(serde_json::Error),
    #[error("invalid rpc response")]
    InvalidRpcResponse,
    #[error("error: rpc response status is {0}. payload:\n{1:?}")]
    RpcResponseStatus(u16, Option<String>),
    #[error("rpc returned error {code}: {message}")]
    RpcError { code: i64, message: String },
    #[error("failed to execute http request:\n{0}")]
    HttpRequest(reqwest::Error),
    #[error("failed to build http client:\n{0}")]
    BuildHttpClient(reqwest::Error),
    #[error("invalid public key {0:?}:\n{1}")]
    InvalidPubkey(String, bs58::decode::Error),
    #[error("invalid public key {0:?}: decoded to {1} bytes instead of 32")]
    InvalidPubkeyLength(String, usize),
    #[error("failed to acquire a socket permit, transport is closed")]
    AcquireSocketPermit,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = StdResult<T, Error>;

/// Splits errors into the ones a retry might fix and the ones it can't.
pub trait Classify {
    fn is_retryable(&self) -> bool;
}

impl Classify for Error {
    fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Error::InvalidPubkey(..)
                | Error::InvalidPubkeyLength(..)
                | Error::RpcError { .. }
                | Error::InvalidConfig(_)
        )
    }
}
