use async_trait::async_trait;
use aw_api_types::{Account, NetworkConfig, WalletStatus};
use std::rc::Rc;

use crate::WalletError;

/// Capabilities of the installed wallet extension.
///
/// The browser implementation wraps the object the extension injects into
/// the page; tests substitute an in-memory double.
#[async_trait(?Send)]
pub trait WalletBridge {
    async fn status(&self) -> Result<WalletStatus, WalletError>;
    async fn lock_wallet(&self) -> Result<(), WalletError>;
    async fn unlock_wallet(&self) -> Result<(), WalletError>;

    async fn current_account(&self) -> Result<Option<Account>, WalletError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, WalletError>;
    async fn switch_account(&self, address: &str) -> Result<(), WalletError>;

    async fn current_network(&self) -> Result<Option<NetworkConfig>, WalletError>;
    async fn list_networks(&self) -> Result<Vec<NetworkConfig>, WalletError>;
    async fn switch_network(&self, chain_id: &str) -> Result<(), WalletError>;
}

#[async_trait(?Send)]
impl<T: WalletBridge + ?Sized> WalletBridge for Rc<T> {
    async fn status(&self) -> Result<WalletStatus, WalletError> {
        (**self).status().await
    }

    async fn lock_wallet(&self) -> Result<(), WalletError> {
        (**self).lock_wallet().await
    }

    async fn unlock_wallet(&self) -> Result<(), WalletError> {
        (**self).unlock_wallet().await
    }

    async fn current_account(&self) -> Result<Option<Account>, WalletError> {
        (**self).current_account().await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, WalletError> {
        (**self).list_accounts().await
    }

    async fn switch_account(&self, address: &str) -> Result<(), WalletError> {
        (**self).switch_account(address).await
    }

    async fn current_network(&self) -> Result<Option<NetworkConfig>, WalletError> {
        (**self).current_network().await
    }

    async fn list_networks(&self) -> Result<Vec<NetworkConfig>, WalletError> {
        (**self).list_networks().await
    }

    async fn switch_network(&self, chain_id: &str) -> Result<(), WalletError> {
        (**self).switch_network(chain_id).await
    }
}
