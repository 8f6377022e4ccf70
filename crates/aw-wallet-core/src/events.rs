//! Reactions to the two notifications the extension dispatches.

use aw_api_types::WalletStatus;
use aw_chain_client::BankQuery;
use tracing::warn;

use crate::bridge::WalletBridge;
use crate::config::WidgetConfig;
use crate::store::WalletStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEvent {
    /// Lock state changed; re-read the status.
    StatusChanged,
    /// Active account or network changed outside the widget.
    KeystoreChanged,
}

impl WalletEvent {
    pub fn from_name(config: &WidgetConfig, name: &str) -> Option<Self> {
        if name == config.status_event {
            Some(Self::StatusChanged)
        } else if name == config.keystore_event {
            Some(Self::KeystoreChanged)
        } else {
            None
        }
    }

    pub fn name(self, config: &WidgetConfig) -> &str {
        match self {
            Self::StatusChanged => &config.status_event,
            Self::KeystoreChanged => &config.keystore_event,
        }
    }
}

/// Initial sync when the widget mounts.
pub async fn on_mount<B: WalletBridge, Q: BankQuery>(store: &WalletStore<B, Q>) {
    store.init_wallet().await;
    if store.snapshot().status == WalletStatus::Unlocked {
        refresh_details(store).await;
    }
}

pub async fn dispatch<B: WalletBridge, Q: BankQuery>(store: &WalletStore<B, Q>, event: WalletEvent) {
    match event {
        WalletEvent::StatusChanged => {
            let changed = store.get_status().await;
            if changed && store.snapshot().status == WalletStatus::Unlocked {
                refresh_details(store).await;
            }
        }
        WalletEvent::KeystoreChanged => refresh_details(store).await,
    }
}

async fn refresh_details<B: WalletBridge, Q: BankQuery>(store: &WalletStore<B, Q>) {
    if let Err(err) = store.fetch_account_and_network_details().await {
        warn!(error = %err, "account/network refresh failed");
    }
}
