use clap::{Args, ValueEnum};
use serde::Deserialize;

#[derive(Args, Deserialize, Clone, Copy, Debug)]
pub struct RetryConfig {
    /// Number of additional attempts made after the first one fails
    #[clap(long, default_value_t = 3)]
    pub max_retries: usize,
    /// Fixed delay between two attempts in milliseconds
    #[clap(long, default_value_t = 1000)]
    pub millis_between_tries: u64,
    /// Which errors are retried
    #[clap(long, value_enum, default_value_t = RetryOn::AnyError)]
    pub retry_on: RetryOn,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            millis_between_tries: 1000,
            retry_on: RetryOn::AnyError,
        }
    }
}

#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RetryOn {
    /// Retry every failure the same way
    AnyError,
    /// Give up immediately on errors that can't succeed on a retry
    TransientOnly,
}

#[derive(Args, Deserialize, Clone, Copy, Debug)]
pub struct TransportConfig {
    /// Maximum number of sockets open to the rpc endpoint at once
    #[clap(long, default_value_t = 25)]
    pub max_sockets: usize,
    /// Idle pooled sockets are closed after this many milliseconds
    #[clap(long, default_value_t = 19000)]
    pub idle_socket_timeout_ms: u64,
    /// Keep sockets alive between requests
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub keep_alive: bool,
    /// Ask the rpc endpoint for gzip compressed responses
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub compression: bool,
    /// Http request timeout in milliseconds. Requests never time out if unset
    #[clap(long)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_sockets: 25,
            idle_socket_timeout_ms: 19000,
            keep_alive: true,
            compression: true,
            request_timeout_ms: None,
        }
    }
}
