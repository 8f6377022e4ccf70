//! Selection dialogs for switching the active account or network.
//!
//! A [`Picker`] owns its list for the lifetime of one open dialog. The list is
//! fetched lazily on the first open and never written back into the shared
//! [`WalletStore`]; closing the dialog drops the picker and its cache.

use async_trait::async_trait;
use aw_api_types::{Account, IdentityKey, NetworkConfig};
use aw_chain_client::BankQuery;
use std::cell::RefCell;
use tracing::{info, warn};

use crate::bridge::WalletBridge;
use crate::store::WalletStore;
use crate::WalletError;

/// Something a picker can list: identified by its identity key and shown by
/// its label.
pub trait Pickable: IdentityKey + Clone {
    fn label(&self) -> &str;
}

impl Pickable for Account {
    fn label(&self) -> &str {
        &self.bech32_address
    }
}

impl Pickable for NetworkConfig {
    fn label(&self) -> &str {
        if self.chain_name.is_empty() {
            &self.chain_id
        } else {
            &self.chain_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerView {
    Loading,
    Empty,
    Single,
    Choices {
        options: Vec<PickerOption>,
        selected: Option<String>,
        can_submit: bool,
    },
}

#[derive(Debug)]
pub struct Picker<T> {
    current: String,
    items: Option<Vec<T>>,
    loading: bool,
    selected: Option<String>,
}

impl<T: Pickable> Picker<T> {
    /// `current` is the identity of the active entry, which is never offered.
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            items: None,
            loading: false,
            selected: None,
        }
    }

    pub fn needs_load(&self) -> bool {
        self.items.is_none() && !self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, items: Vec<T>) {
        self.loading = false;
        self.items = Some(items);
    }

    /// An empty value (the placeholder option) clears the selection.
    pub fn select(&mut self, value: &str) {
        self.selected = (!value.is_empty()).then(|| value.to_owned());
    }

    /// The identity to switch to, if the user picked something other than
    /// the current entry.
    pub fn submission(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .filter(|selected| *selected != self.current)
    }

    pub fn view(&self) -> PickerView {
        let items = match (&self.items, self.loading) {
            (_, true) | (None, false) => return PickerView::Loading,
            (Some(items), false) => items,
        };
        match items.len() {
            0 => PickerView::Empty,
            1 => PickerView::Single,
            _ => PickerView::Choices {
                options: items
                    .iter()
                    .filter(|item| item.identity() != self.current)
                    .map(|item| PickerOption {
                        value: item.identity().to_owned(),
                        label: item.label().to_owned(),
                    })
                    .collect(),
                selected: self.selected.clone(),
                can_submit: self.submission().is_some(),
            },
        }
    }
}

/// Where a picker lists its entries and sends the chosen one.
#[async_trait(?Send)]
pub trait PickerSource<T> {
    async fn list(&self) -> Vec<T>;
    async fn switch_to(&self, identity: &str) -> Result<(), WalletError>;
}

#[async_trait(?Send)]
impl<B: WalletBridge, Q: BankQuery> PickerSource<Account> for WalletStore<B, Q> {
    async fn list(&self) -> Vec<Account> {
        self.list_accounts().await
    }

    async fn switch_to(&self, identity: &str) -> Result<(), WalletError> {
        self.switch_account(identity).await
    }
}

#[async_trait(?Send)]
impl<B: WalletBridge, Q: BankQuery> PickerSource<NetworkConfig> for WalletStore<B, Q> {
    async fn list(&self) -> Vec<NetworkConfig> {
        self.list_networks().await
    }

    async fn switch_to(&self, identity: &str) -> Result<(), WalletError> {
        self.switch_network(identity).await
    }
}

/// Fetch the picker's list unless it is already loaded or loading.
pub async fn load<T, S>(picker: &RefCell<Picker<T>>, source: &S)
where
    T: Pickable,
    S: PickerSource<T> + ?Sized,
{
    {
        let mut picker = picker.borrow_mut();
        if !picker.needs_load() {
            return;
        }
        picker.begin_load();
    }
    let items = source.list().await;
    picker.borrow_mut().finish_load(items);
}

/// Switch to the selected entry. `Ok(false)` means nothing was submittable;
/// `Ok(true)` means the dialog can close.
pub async fn submit<T, S>(picker: &RefCell<Picker<T>>, source: &S) -> Result<bool, WalletError>
where
    T: Pickable,
    S: PickerSource<T> + ?Sized,
{
    let Some(target) = picker.borrow().submission().map(str::to_owned) else {
        return Ok(false);
    };
    match source.switch_to(&target).await {
        Ok(()) => {
            info!(%target, "switch requested");
            Ok(true)
        }
        Err(err) => {
            warn!(error = %err, %target, "switch failed");
            Err(err)
        }
    }
}
