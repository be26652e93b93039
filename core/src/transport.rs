//! Pooled http transport shared by every rpc call. The socket ceiling is
//! enforced with a semaphore because reqwest only bounds idle connections.

use crate::config::TransportConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::Semaphore;

pub struct Transport {
    http_client: reqwest::Client,
    sockets: Semaphore,
    max_sockets: usize,
}

impl Transport {
    pub fn new(cfg: TransportConfig) -> Result<Transport> {
        if cfg.max_sockets == 0 {
            return Err(Error::InvalidConfig("max_sockets must be greater than 0"));
        }

        let idle_timeout = Duration::from_millis(cfg.idle_socket_timeout_ms);

        let mut builder = reqwest::ClientBuilder::new().gzip(cfg.compression);

        builder = if cfg.keep_alive {
            builder
                .pool_max_idle_per_host(cfg.max_sockets)
                .pool_idle_timeout(idle_timeout)
        } else {
            builder.pool_max_idle_per_host(0)
        };

        if let Some(timeout_ms) = cfg.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let http_client = builder.build().map_err(Error::BuildHttpClient)?;

        Ok(Transport {
            http_client,
            sockets: Semaphore::new(cfg.max_sockets),
            max_sockets: cfg.max_sockets,
        })
    }

    pub fn max_sockets(&self) -> usize {
        self.max_sockets
    }

    pub fn available_sockets(&self) -> usize {
        self.sockets.available_permits()
    }

    /// Posts `body` as json and parses the json response. A socket permit is
    /// held until the response body has been read.
    pub async fn post_json<B, T>(&self, url: &url::Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _permit = self
            .sockets
            .acquire()
            .await
            .map_err(|_| Error::AcquireSocketPermit)?;

        let resp = self
            .http_client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(Error::HttpRequest)?;

        let resp_status = resp.status();
        if !resp_status.is_success() {
            let body = resp.text().await.ok();
            return Err(Error::RpcResponseStatus(resp_status.as_u16(), body));
        }

        resp.json().await.map_err(Error::RpcResponseParse)
    }
}
