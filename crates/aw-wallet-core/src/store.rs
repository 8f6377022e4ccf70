//! Shared wallet state and the refresh operations that keep it in sync with
//! the extension.
//!
//! All mutation happens on the single browser event loop. Overlapping
//! refreshes of the same kind are ordered by [`RefreshSequence`]: a refresh
//! whose token has been superseded drops its result instead of committing it.

use aw_api_types::{Account, IdentityKey, NetworkConfig, WalletStatus};
use aw_chain_client::BankQuery;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::balance::BalanceResolver;
use crate::bridge::WalletBridge;
use crate::sequence::RefreshSequence;
use crate::WalletError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BalanceView {
    #[default]
    Unset,
    Ready(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletState {
    pub bridge_found: bool,
    pub status: WalletStatus,
    pub account: Option<Account>,
    pub network: Option<NetworkConfig>,
    pub balance: BalanceView,
    /// Set until the first account/network refresh has finished.
    pub details_loading: bool,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            bridge_found: false,
            status: WalletStatus::NotLoaded,
            account: None,
            network: None,
            balance: BalanceView::Unset,
            details_loading: true,
        }
    }
}

impl WalletState {
    pub fn current_address(&self) -> Option<&str> {
        self.account.as_ref().map(IdentityKey::identity)
    }

    pub fn current_chain_id(&self) -> Option<&str> {
        self.network.as_ref().map(IdentityKey::identity)
    }
}

type Watcher = Rc<dyn Fn(&WalletState)>;

pub struct WalletStore<B, Q> {
    bridge: Option<Rc<B>>,
    resolver: BalanceResolver<Q>,
    state: RefCell<WalletState>,
    status_seq: RefreshSequence,
    details_seq: RefreshSequence,
    watchers: RefCell<Vec<Watcher>>,
}

impl<B, Q> WalletStore<B, Q>
where
    B: WalletBridge,
    Q: BankQuery,
{
    /// `bridge` is `None` when no extension was found on the page.
    pub fn new(bridge: Option<B>, query: Q) -> Self {
        Self {
            bridge: bridge.map(Rc::new),
            resolver: BalanceResolver::new(query),
            state: RefCell::new(WalletState::default()),
            status_seq: RefreshSequence::default(),
            details_seq: RefreshSequence::default(),
            watchers: RefCell::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> WalletState {
        self.state.borrow().clone()
    }

    /// Register a callback run after every committed change.
    pub fn watch(&self, watcher: impl Fn(&WalletState) + 'static) {
        self.watchers.borrow_mut().push(Rc::new(watcher));
    }

    pub fn clear_watchers(&self) {
        self.watchers.borrow_mut().clear();
    }

    fn bridge(&self) -> Result<Rc<B>, WalletError> {
        self.bridge.clone().ok_or(WalletError::BridgeMissing)
    }

    fn update(&self, apply: impl FnOnce(&mut WalletState) -> bool) -> bool {
        let changed = apply(&mut self.state.borrow_mut());
        if changed {
            self.notify();
        }
        changed
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let watchers: Vec<Watcher> = self.watchers.borrow().clone();
        for watcher in watchers {
            watcher(&snapshot);
        }
    }

    /// Publish the bridge handle and read the initial status.
    /// Without a bridge this is a no-op and the state stays "not found".
    pub async fn init_wallet(&self) {
        let Some(bridge) = self.bridge.clone() else {
            debug!("no wallet extension on the page");
            return;
        };
        self.update(|state| !std::mem::replace(&mut state.bridge_found, true));
        self.refresh_status(&bridge).await;
    }

    /// Re-read the bridge status. Returns whether the held status changed.
    pub async fn get_status(&self) -> bool {
        match self.bridge.clone() {
            Some(bridge) => self.refresh_status(&bridge).await,
            None => false,
        }
    }

    async fn refresh_status(&self, bridge: &B) -> bool {
        let token = self.status_seq.begin();
        let reported = match bridge.status().await {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "wallet status unavailable, keeping last known status");
                return false;
            }
        };
        if !self.status_seq.is_current(token) {
            debug!(?reported, "discarding superseded status read");
            return false;
        }
        // NotLoaded carries no information about the wallet itself.
        if reported == WalletStatus::NotLoaded {
            return false;
        }

        self.update(|state| {
            if state.status == reported {
                return false;
            }
            info!(from = ?state.status, to = ?reported, "wallet status changed");
            state.status = reported;
            true
        })
    }

    /// Read the active account and network, replace whichever changed
    /// identity, then resolve the balance when both are known.
    pub async fn fetch_account_and_network_details(&self) -> Result<(), WalletError> {
        let bridge = self.bridge()?;
        let token = self.details_seq.begin();

        let observed = async {
            let account = bridge.current_account().await?;
            let network = bridge.current_network().await?;
            Ok::<_, WalletError>((account, network))
        }
        .await;

        let (account, network) = match observed {
            Ok(pair) => pair,
            Err(err) => {
                if self.details_seq.is_current(token) {
                    self.finish_details();
                }
                return Err(err);
            }
        };
        if !self.details_seq.is_current(token) {
            debug!("discarding superseded account/network read");
            return Ok(());
        }

        self.update(|state| {
            let account_changed = replace_if_new(&mut state.account, account.as_ref());
            let network_changed = replace_if_new(&mut state.network, network.as_ref());
            let identity_changed = account_changed | network_changed;
            // A balance belongs to the account/network pair it was read for.
            if identity_changed {
                state.balance = BalanceView::Unset;
            }
            identity_changed
        });

        if let (Some(account), Some(network)) = (&account, &network) {
            let resolved = self.resolver.resolve(network, account).await;
            if !self.details_seq.is_current(token) {
                debug!(address = %account.bech32_address, "discarding superseded balance");
                return Ok(());
            }

            let view = match resolved {
                Ok(formatted) => BalanceView::Ready(formatted),
                Err(err) => {
                    warn!(error = %err, chain_id = %network.chain_id, "balance unavailable");
                    BalanceView::Unavailable(err.to_string())
                }
            };
            self.update(|state| {
                if state.balance == view {
                    return false;
                }
                state.balance = view;
                true
            });
        }

        self.finish_details();
        Ok(())
    }

    fn finish_details(&self) {
        self.update(|state| std::mem::replace(&mut state.details_loading, false));
    }

    pub async fn lock_wallet(&self) -> Result<(), WalletError> {
        self.bridge()?.lock_wallet().await
    }

    pub async fn unlock_wallet(&self) -> Result<(), WalletError> {
        self.bridge()?.unlock_wallet().await
    }

    /// Accounts known to the extension; empty when they cannot be listed.
    pub async fn list_accounts(&self) -> Vec<Account> {
        let listed = match self.bridge() {
            Ok(bridge) => bridge.list_accounts().await,
            Err(err) => Err(err),
        };
        listed.unwrap_or_else(|err| {
            warn!(error = %err, "account list unavailable");
            Vec::new()
        })
    }

    /// Networks known to the extension; empty when they cannot be listed.
    pub async fn list_networks(&self) -> Vec<NetworkConfig> {
        let listed = match self.bridge() {
            Ok(bridge) => bridge.list_networks().await,
            Err(err) => Err(err),
        };
        listed.unwrap_or_else(|err| {
            warn!(error = %err, "network list unavailable");
            Vec::new()
        })
    }

    pub async fn switch_account(&self, address: &str) -> Result<(), WalletError> {
        self.bridge()?.switch_account(address).await
    }

    pub async fn switch_network(&self, chain_id: &str) -> Result<(), WalletError> {
        self.bridge()?.switch_network(chain_id).await
    }
}

/// Store `observed` in `slot` only when its identity differs from the held
/// value. A missing observation never clears the slot.
fn replace_if_new<T: IdentityKey + Clone>(slot: &mut Option<T>, observed: Option<&T>) -> bool {
    let Some(observed) = observed else {
        return false;
    };
    if slot.as_ref().map(IdentityKey::identity) == Some(observed.identity()) {
        return false;
    }
    *slot = Some(observed.clone());
    true
}
