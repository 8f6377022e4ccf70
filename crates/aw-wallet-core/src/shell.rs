use aw_api_types::WalletStatus;

use crate::store::{BalanceView, WalletState};

pub const BALANCE_UNAVAILABLE: &str = "Balance unavailable";

/// Rows of the account/network panel. The network row shows the chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub network: String,
    pub account: String,
    pub balance: String,
}

/// What the widget shows for a given [`WalletState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    Initialising { wallet_found: bool },
    Locked,
    Empty,
    /// `details` is `None` while the first refresh is still running.
    Unlocked { details: Option<DetailsView> },
}

impl ShellView {
    pub fn from_state(state: &WalletState) -> Self {
        match state.status {
            WalletStatus::NotLoaded => Self::Initialising {
                wallet_found: state.bridge_found,
            },
            WalletStatus::Locked => Self::Locked,
            WalletStatus::Empty => Self::Empty,
            WalletStatus::Unlocked => Self::Unlocked {
                details: (!state.details_loading).then(|| DetailsView::from_state(state)),
            },
        }
    }

    /// Switch controls need an entry to exclude from the list.
    pub fn can_switch_account(state: &WalletState) -> bool {
        state.status == WalletStatus::Unlocked && state.account.is_some()
    }

    pub fn can_switch_network(state: &WalletState) -> bool {
        state.status == WalletStatus::Unlocked && state.network.is_some()
    }
}

impl DetailsView {
    fn from_state(state: &WalletState) -> Self {
        let balance = match &state.balance {
            BalanceView::Ready(formatted) => formatted.clone(),
            BalanceView::Unavailable(_) => BALANCE_UNAVAILABLE.to_owned(),
            BalanceView::Unset => String::new(),
        };
        Self {
            network: state.current_chain_id().unwrap_or_default().to_owned(),
            account: state.current_address().unwrap_or_default().to_owned(),
            balance,
        }
    }
}
