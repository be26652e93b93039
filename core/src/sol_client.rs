use crate::error::{Error, Result};
use crate::sol_request::{Commitment, GetAccountInfo, SolRequest};
use crate::transport::Transport;
use crate::types::{AccountInfo, Pubkey};
use serde_json::Value as JsonValue;
use std::future::Future;
use std::sync::Arc;

/// Something that can look up the current state of one account.
pub trait FetchAccount {
    fn fetch_account(&self, key: &str) -> impl Future<Output = Result<Option<AccountInfo>>>;
}

pub struct SolClient {
    transport: Arc<Transport>,
    rpc_url: url::Url,
    commitment: Option<Commitment>,
}

impl SolClient {
    pub fn new(transport: Arc<Transport>, rpc_url: url::Url) -> SolClient {
        SolClient {
            transport,
            rpc_url,
            commitment: None,
        }
    }

    pub fn with_commitment(mut self, commitment: Option<Commitment>) -> Self {
        self.commitment = commitment;
        self
    }

    pub async fn send<R: SolRequest>(&self, req: R) -> Result<R::Resp> {
        let rpc_result: JsonValue = self
            .transport
            .post_json(&self.rpc_url, &req.to_body(1))
            .await?;

        let mut rpc_result = match rpc_result {
            JsonValue::Object(rpc_result) => rpc_result,
            _ => return Err(Error::InvalidRpcResponse),
        };

        if let Some(err) = rpc_result.remove("error") {
            return Err(rpc_error(err));
        }

        let rpc_result = rpc_result
            .remove("result")
            .ok_or(Error::InvalidRpcResponse)?;

        let rpc_result = serde_json::from_value(rpc_result).map_err(Error::RpcResultParse)?;

        Ok(rpc_result)
    }

    /// Returns `None` if the node has no account at `key`.
    pub async fn get_account_info(&self, key: &str) -> Result<Option<AccountInfo>> {
        let pubkey: Pubkey = key.parse()?;

        let resp = self
            .send(GetAccountInfo {
                pubkey,
                commitment: self.commitment,
            })
            .await?;

        Ok(resp.value)
    }
}

impl FetchAccount for SolClient {
    async fn fetch_account(&self, key: &str) -> Result<Option<AccountInfo>> {
        self.get_account_info(key).await
    }
}

fn rpc_error(err: JsonValue) -> Error {
    let code = err.get("code").and_then(JsonValue::as_i64).unwrap_or(0);
    let message = match err.get("message").and_then(JsonValue::as_str) {
        Some(message) => message.to_owned(),
        None => err.to_string(),
    };

    Error::RpcError { code, message }
}
