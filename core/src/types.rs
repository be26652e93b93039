use crate::error::Error;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const PUBKEY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Deref, Deserialize)]
#[serde(try_from = "String")]
pub struct Pubkey(pub [u8; PUBKEY_LEN]);

impl FromStr for Pubkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| Error::InvalidPubkey(s.to_owned(), e))?;
        let bytes: [u8; PUBKEY_LEN] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| Error::InvalidPubkeyLength(s.to_owned(), b.len()))?;

        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Pubkey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub lamports: u64,
    pub owner: Pubkey,
    /// Encoded account data and the name of its encoding
    pub data: (String, String),
    pub executable: bool,
    pub rent_epoch: u64,
    pub space: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcContext {
    pub slot: u64,
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub context: RpcContext,
    pub value: T,
}
