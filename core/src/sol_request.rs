use crate::types::{AccountInfo, Pubkey, RpcResponse};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

pub trait SolRequest {
    type Resp: DeserializeOwned;

    fn to_body(&self, id: usize) -> JsonValue;
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetAccountInfo {
    pub pubkey: Pubkey,
    pub commitment: Option<Commitment>,
}

impl SolRequest for GetAccountInfo {
    type Resp = RpcResponse<Option<AccountInfo>>;

    fn to_body(&self, id: usize) -> JsonValue {
        let mut config = serde_json::json!({ "encoding": "base64" });
        if let Some(commitment) = self.commitment {
            config["commitment"] = commitment.as_str().into();
        }

        serde_json::json!({
            "jsonrpc": "2.0",
            "method": "getAccountInfo",
            "params": [
                self.pubkey.to_string(),
                config,
            ],
            "id": id,
        })
    }
}
