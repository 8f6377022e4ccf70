//! The two switch dialogs. Each open dialog owns a [`Picker`]; closing the
//! dialog drops it along with the fetched list.

use aw_api_types::{Account, NetworkConfig};
use aw_wallet_core::{Picker, PickerView, WalletError, WalletState, picker};
use std::cell::RefCell;

use crate::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Account,
    Network,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Account => "Switch Account",
            Self::Network => "Network Switch",
        }
    }

    /// Accounts show only a spinner while loading.
    pub fn loading_text(self) -> Option<&'static str> {
        match self {
            Self::Account => None,
            Self::Network => Some("Loading networks..."),
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            Self::Account => "No accounts found. Please create or add an account.",
            Self::Network => "No networks found. Please add or configure a network.",
        }
    }

    pub fn single_text(self) -> &'static str {
        match self {
            Self::Account => "You only have one account. No need to switch.",
            Self::Network => "You only have one network. No need to switch.",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Account => "Select an account to switch:",
            Self::Network => "Select a network to switch:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Account => "Select Account",
            Self::Network => "Select Network",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Account => "Switch Account",
            Self::Network => "Submit",
        }
    }
}

pub enum Modal {
    Account(RefCell<Picker<Account>>),
    Network(RefCell<Picker<NetworkConfig>>),
}

impl Modal {
    /// A dialog opens only while the store holds the entry it switches away
    /// from.
    pub fn open(kind: ModalKind, state: &WalletState) -> Option<Self> {
        match kind {
            ModalKind::Account => state
                .current_address()
                .map(|address| Self::Account(RefCell::new(Picker::new(address)))),
            ModalKind::Network => state
                .current_chain_id()
                .map(|chain_id| Self::Network(RefCell::new(Picker::new(chain_id)))),
        }
    }

    pub fn kind(&self) -> ModalKind {
        match self {
            Self::Account(_) => ModalKind::Account,
            Self::Network(_) => ModalKind::Network,
        }
    }

    pub fn view(&self) -> PickerView {
        match self {
            Self::Account(p) => p.borrow().view(),
            Self::Network(p) => p.borrow().view(),
        }
    }

    pub fn select(&self, value: &str) {
        match self {
            Self::Account(p) => p.borrow_mut().select(value),
            Self::Network(p) => p.borrow_mut().select(value),
        }
    }

    pub async fn load(&self, store: &Store) {
        match self {
            Self::Account(p) => picker::load(p, store).await,
            Self::Network(p) => picker::load(p, store).await,
        }
    }

    pub async fn submit(&self, store: &Store) -> Result<bool, WalletError> {
        match self {
            Self::Account(p) => picker::submit(p, store).await,
            Self::Network(p) => picker::submit(p, store).await,
        }
    }
}
