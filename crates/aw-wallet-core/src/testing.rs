//! In-memory doubles for the extension and the bank REST query.

use async_trait::async_trait;
use aw_api_types::{Account, Coin, Currency, DenomUnit, NetworkConfig, WalletStatus};
use aw_chain_client::BankQuery;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;

use crate::{WalletBridge, WalletError};

pub(crate) fn atom_network() -> NetworkConfig {
    NetworkConfig {
        chain_id: "net-1".into(),
        chain_name: "Net One".into(),
        rest_url: "https://x".into(),
        currencies: vec![Currency {
            decimals: 6,
            denom_units: vec![
                DenomUnit { name: "uatom".into(), exponent: 0 },
                DenomUnit { name: "atom".into(), exponent: 6 },
            ],
        }],
    }
}

pub(crate) fn other_network() -> NetworkConfig {
    NetworkConfig {
        chain_id: "net-2".into(),
        chain_name: "Net Two".into(),
        rest_url: "https://y".into(),
        currencies: vec![Currency {
            decimals: 18,
            denom_units: vec![
                DenomUnit { name: "afet".into(), exponent: 0 },
                DenomUnit { name: "fet".into(), exponent: 18 },
            ],
        }],
    }
}

pub(crate) fn coin(denom: &str, amount: &str) -> Coin {
    Coin {
        denom: denom.into(),
        amount: amount.into(),
    }
}

pub(crate) struct MockBridge {
    status: RefCell<Result<WalletStatus, WalletError>>,
    account: RefCell<Option<Account>>,
    queued_accounts: RefCell<VecDeque<Account>>,
    network: RefCell<Option<NetworkConfig>>,
    accounts: RefCell<Vec<Account>>,
    networks: RefCell<Vec<NetworkConfig>>,
    details_error: RefCell<Option<String>>,
    list_error: RefCell<Option<String>>,
    list_calls: Cell<usize>,
    calls: RefCell<Vec<String>>,
}

impl MockBridge {
    pub(crate) fn with_status(status: WalletStatus) -> Self {
        Self {
            status: RefCell::new(Ok(status)),
            account: RefCell::new(None),
            queued_accounts: RefCell::new(VecDeque::new()),
            network: RefCell::new(None),
            accounts: RefCell::new(Vec::new()),
            networks: RefCell::new(Vec::new()),
            details_error: RefCell::new(None),
            list_error: RefCell::new(None),
            list_calls: Cell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn unlocked(address: &str, network: NetworkConfig) -> Self {
        let bridge = Self::with_status(WalletStatus::Unlocked);
        bridge.set_account(Some(Account::new(address)));
        bridge.set_network(Some(network));
        bridge
    }

    pub(crate) fn set_status(&self, status: Result<WalletStatus, WalletError>) {
        *self.status.borrow_mut() = status;
    }

    pub(crate) fn set_account(&self, account: Option<Account>) {
        *self.account.borrow_mut() = account;
    }

    pub(crate) fn set_network(&self, network: Option<NetworkConfig>) {
        *self.network.borrow_mut() = network;
    }

    /// Accounts returned by successive `currentAccount` calls before falling
    /// back to the fixed account.
    pub(crate) fn queue_accounts<const N: usize>(&self, addresses: [&str; N]) {
        self.queued_accounts
            .borrow_mut()
            .extend(addresses.into_iter().map(Account::new));
    }

    pub(crate) fn set_accounts(&self, accounts: Vec<Account>) {
        *self.accounts.borrow_mut() = accounts;
    }

    pub(crate) fn set_networks(&self, networks: Vec<NetworkConfig>) {
        *self.networks.borrow_mut() = networks;
    }

    pub(crate) fn fail_details(&self, message: &str) {
        *self.details_error.borrow_mut() = Some(message.to_owned());
    }

    pub(crate) fn fail_lists(&self, message: &str) {
        *self.list_error.borrow_mut() = Some(message.to_owned());
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn list_guard(&self, op: &'static str) -> Result<(), WalletError> {
        self.list_calls.set(self.list_calls.get() + 1);
        match self.list_error.borrow().as_deref() {
            Some(message) => Err(WalletError::bridge(op, message)),
            None => Ok(()),
        }
    }

    fn details_guard(&self, op: &'static str) -> Result<(), WalletError> {
        match self.details_error.borrow().as_deref() {
            Some(message) => Err(WalletError::bridge(op, message)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl WalletBridge for MockBridge {
    async fn status(&self) -> Result<WalletStatus, WalletError> {
        self.status.borrow().clone()
    }

    async fn lock_wallet(&self) -> Result<(), WalletError> {
        self.record("lockWallet".into());
        Ok(())
    }

    async fn unlock_wallet(&self) -> Result<(), WalletError> {
        self.record("unlockWallet".into());
        Ok(())
    }

    async fn current_account(&self) -> Result<Option<Account>, WalletError> {
        self.details_guard("currentAccount")?;
        if let Some(next) = self.queued_accounts.borrow_mut().pop_front() {
            return Ok(Some(next));
        }
        Ok(self.account.borrow().clone())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, WalletError> {
        self.list_guard("listAccounts")?;
        Ok(self.accounts.borrow().clone())
    }

    async fn switch_account(&self, address: &str) -> Result<(), WalletError> {
        self.record(format!("switchAccount {address}"));
        Ok(())
    }

    async fn current_network(&self) -> Result<Option<NetworkConfig>, WalletError> {
        self.details_guard("getNetwork")?;
        Ok(self.network.borrow().clone())
    }

    async fn list_networks(&self) -> Result<Vec<NetworkConfig>, WalletError> {
        self.list_guard("listNetworks")?;
        Ok(self.networks.borrow().clone())
    }

    async fn switch_network(&self, chain_id: &str) -> Result<(), WalletError> {
        self.record(format!("switchToNetworkByChainId {chain_id}"));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockBank {
    balances: RefCell<HashMap<String, Vec<Coin>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    failure: RefCell<Option<String>>,
    calls: Cell<usize>,
}

impl MockBank {
    pub(crate) fn set_balances(&self, address: &str, balances: Vec<Coin>) {
        self.balances.borrow_mut().insert(address.to_owned(), balances);
    }

    pub(crate) fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_owned());
    }

    /// Hold the next query for `address` until the returned sender fires.
    pub(crate) fn gate(&self, address: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(address.to_owned(), rx);
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl BankQuery for MockBank {
    async fn all_balances(&self, _rest_url: &str, address: &str) -> anyhow::Result<Vec<Coin>> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gates.borrow_mut().remove(address);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(message) = self.failure.borrow().clone() {
            anyhow::bail!(message);
        }
        Ok(self.balances.borrow().get(address).cloned().unwrap_or_default())
    }
}
