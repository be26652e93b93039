use sol_accounts_core::config::{RetryConfig, RetryOn};
use sol_accounts_core::retry::Retry;
use sol_accounts_core::sol_client::FetchAccount;
use sol_accounts_core::types::{AccountInfo, Pubkey};
use sol_accounts_core::Error as CoreError;
use sol_accounts_fetcher::{Error, KeySource, Result};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub const LATENCY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    End(String),
}

/// Fake rpc client. Every fetch takes `LATENCY`; keys listed in `failures`
/// fail that many times before succeeding, keys in `missing` resolve to
/// no account.
#[derive(Default)]
pub struct MockClient {
    pub failures: HashMap<String, usize>,
    pub missing: Vec<String>,
    pub attempts: RefCell<HashMap<String, usize>>,
    pub events: RefCell<Vec<Event>>,
    pub in_flight: Cell<usize>,
    pub max_in_flight: Cell<usize>,
}

impl MockClient {
    pub fn failing(failures: &[(&str, usize)]) -> Self {
        Self {
            failures: failures
                .iter()
                .map(|(key, n)| (key.to_string(), *n))
                .collect(),
            ..Default::default()
        }
    }

    pub fn attempts(&self, key: &str) -> usize {
        self.attempts.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn total_attempts(&self) -> usize {
        self.attempts.borrow().values().sum()
    }

    pub fn started(&self, key: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|e| *e == Event::Start(key.to_owned()))
    }
}

impl FetchAccount for MockClient {
    async fn fetch_account(&self, key: &str) -> sol_accounts_core::Result<Option<AccountInfo>> {
        self.events.borrow_mut().push(Event::Start(key.to_owned()));
        self.in_flight.set(self.in_flight.get() + 1);
        self.max_in_flight
            .set(self.max_in_flight.get().max(self.in_flight.get()));

        tokio::time::sleep(LATENCY).await;

        self.in_flight.set(self.in_flight.get() - 1);
        self.events.borrow_mut().push(Event::End(key.to_owned()));

        let attempt = {
            let mut attempts = self.attempts.borrow_mut();
            let attempt = attempts.entry(key.to_owned()).or_default();
            *attempt += 1;
            *attempt
        };

        if attempt <= self.failures.get(key).copied().unwrap_or(0) {
            return Err(CoreError::RpcResponseStatus(429, Some("rate limited".to_owned())));
        }

        if self.missing.iter().any(|m| m == key) {
            return Ok(None);
        }

        Ok(Some(AccountInfo {
            lamports: 1,
            owner: Pubkey([0; 32]),
            data: (String::new(), "base64".to_owned()),
            executable: false,
            rent_epoch: 0,
            space: Some(0),
        }))
    }
}

/// Key source that replays a script of load results, then fails.
pub struct ScriptedKeys {
    pub loads: RefCell<VecDeque<Vec<String>>>,
    pub calls: Rc<Cell<usize>>,
}

impl ScriptedKeys {
    pub fn new(loads: Vec<Vec<String>>) -> Self {
        Self {
            loads: RefCell::new(loads.into()),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl KeySource for ScriptedKeys {
    async fn load_keys(&self) -> Result<Vec<String>> {
        self.calls.set(self.calls.get() + 1);
        self.loads.borrow_mut().pop_front().ok_or_else(|| {
            Error::ReadKeyFile(
                PathBuf::from("keys.txt"),
                io::Error::new(io::ErrorKind::NotFound, "script exhausted"),
            )
        })
    }
}

pub fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{}", i)).collect()
}

pub fn retry() -> Retry {
    Retry::new(RetryConfig {
        max_retries: 3,
        millis_between_tries: 1000,
        retry_on: RetryOn::AnyError,
    })
}
