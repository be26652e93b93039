mod batch;
mod config;
mod error;
mod key_source;
mod poller;

pub use batch::{num_batches, BatchFetcher, BatchReport, DEFAULT_BATCH_SIZE};
pub use config::{BatchMode, Config, FetchConfig};
pub use error::{Error, Result};
pub use key_source::{parse_keys, FileKeySource, KeySource};
pub use poller::Poller;
