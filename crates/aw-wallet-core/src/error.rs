use thiserror::Error;

/// Every failure the widget can observe.
///
/// The store decides per operation how a variant surfaces: list reads
/// degrade to an empty list, status reads leave the held status alone and
/// balance failures become [`crate::BalanceView::Unavailable`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("wallet extension not found")]
    BridgeMissing,
    #[error("wallet call `{op}` failed: {message}")]
    Bridge { op: &'static str, message: String },
    #[error("balance query failed: {0}")]
    BalanceQuery(String),
    #[error("network {chain_id} declares no currencies")]
    NoCurrency { chain_id: String },
    #[error("balance amount `{amount}` for {denom} is not an unsigned integer")]
    InvalidAmount { denom: String, amount: String },
    #[error("balance amount `{amount}` ({decimals} decimals) exceeds 256 bits")]
    AmountOutOfRange { amount: String, decimals: u32 },
}

impl WalletError {
    pub fn bridge(op: &'static str, message: impl Into<String>) -> Self {
        Self::Bridge {
            op,
            message: message.into(),
        }
    }
}
