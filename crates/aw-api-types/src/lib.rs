use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state reported by the wallet extension.
///
/// The extension reports a plain number; the discriminants below are the
/// values it uses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum WalletStatus {
    #[default]
    NotLoaded = 0,
    Empty = 1,
    Locked = 2,
    Unlocked = 3,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unknown wallet status {0}")]
pub struct UnknownWalletStatus(pub u8);

impl TryFrom<u8> for WalletStatus {
    type Error = UnknownWalletStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotLoaded),
            1 => Ok(Self::Empty),
            2 => Ok(Self::Locked),
            3 => Ok(Self::Unlocked),
            other => Err(UnknownWalletStatus(other)),
        }
    }
}

impl From<WalletStatus> for u8 {
    fn from(status: WalletStatus) -> Self {
        status as u8
    }
}

/// Key used to decide whether a newly observed value replaces the held one.
pub trait IdentityKey {
    fn identity(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub bech32_address: String,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            bech32_address: address.into(),
        }
    }
}

impl IdentityKey for Account {
    fn identity(&self) -> &str {
        &self.bech32_address
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DenomUnit {
    pub name: String,
    pub exponent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub decimals: u32,
    #[serde(default)]
    pub denom_units: Vec<DenomUnit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: String,
    #[serde(default)]
    pub chain_name: String,
    pub rest_url: String,
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl IdentityKey for NetworkConfig {
    fn identity(&self) -> &str {
        &self.chain_id
    }
}

/// One `{denom, amount}` entry of a bank balances response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResponse {
    #[serde(default)]
    pub next_key: Option<String>,
    #[serde(default)]
    pub total: Option<String>,
}

/// Body of `GET /cosmos/bank/v1beta1/balances/{address}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalancesResponse {
    pub balances: Vec<Coin>,
    #[serde(default)]
    pub pagination: Option<PageResponse>,
}
