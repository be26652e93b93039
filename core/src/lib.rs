pub mod config;
pub mod error;
pub mod retry;
pub mod sol_client;
pub mod sol_request;
pub mod transport;
pub mod types;

pub use error::{Classify, Error, Result};
