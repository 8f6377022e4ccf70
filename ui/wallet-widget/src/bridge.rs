//! Binding to the object the wallet extension injects into the page.
//!
//! The global's name is configurable, so methods are resolved at call time
//! through `Reflect` rather than a static `extern "C"` block. Each method
//! returns a promise that is awaited through `JsFuture`.

use async_trait::async_trait;
use aw_api_types::{Account, NetworkConfig, WalletStatus};
use aw_wallet_core::{WalletBridge, WidgetConfig, WalletError};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub struct JsWalletBridge {
    wallet: JsValue,
}

impl JsWalletBridge {
    /// Look for `window[bridgeGlobal].wallet`, retrying while the extension
    /// may still be injecting itself.
    pub async fn detect(config: &WidgetConfig) -> Option<Self> {
        let attempts = config.detect_attempts.max(1);
        for attempt in 1..=attempts {
            if let Some(wallet) = lookup(&config.bridge_global) {
                info!(global = %config.bridge_global, attempt, "wallet extension detected");
                return Some(Self { wallet });
            }
            if attempt < attempts {
                TimeoutFuture::new(config.detect_interval_ms).await;
            }
        }
        debug!(global = %config.bridge_global, attempts, "wallet extension not detected");
        None
    }

    async fn call(
        &self,
        namespace: Option<&str>,
        op: &'static str,
        args: &[JsValue],
    ) -> Result<JsValue, WalletError> {
        let target = match namespace {
            Some(name) => Reflect::get(&self.wallet, &JsValue::from_str(name))
                .map_err(|err| WalletError::bridge(op, js_message(&err)))?,
            None => self.wallet.clone(),
        };
        let method = Reflect::get(&target, &JsValue::from_str(op))
            .map_err(|err| WalletError::bridge(op, js_message(&err)))?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::bridge(op, "not a function"))?;

        let result = method
            .apply(&target, &args.iter().collect::<Array>())
            .map_err(|err| WalletError::bridge(op, js_message(&err)))?;
        match result.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|err| WalletError::bridge(op, js_message(&err))),
            Err(value) => Ok(value),
        }
    }

    async fn call_parsed<T: DeserializeOwned>(
        &self,
        namespace: Option<&str>,
        op: &'static str,
        args: &[JsValue],
    ) -> Result<T, WalletError> {
        let value = self.call(namespace, op, args).await?;
        serde_wasm_bindgen::from_value(value).map_err(|err| WalletError::bridge(op, err.to_string()))
    }

    async fn call_optional<T: DeserializeOwned>(
        &self,
        namespace: Option<&str>,
        op: &'static str,
    ) -> Result<Option<T>, WalletError> {
        let value = self.call(namespace, op, &[]).await?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|err| WalletError::bridge(op, err.to_string()))
    }
}

fn lookup(global: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let injected = Reflect::get(&window, &JsValue::from_str(global)).ok()?;
    if !injected.is_object() {
        return None;
    }
    let wallet = Reflect::get(&injected, &JsValue::from_str("wallet")).ok()?;
    wallet.is_object().then_some(wallet)
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[async_trait(?Send)]
impl WalletBridge for JsWalletBridge {
    async fn status(&self) -> Result<WalletStatus, WalletError> {
        self.call_parsed(None, "status", &[]).await
    }

    async fn lock_wallet(&self) -> Result<(), WalletError> {
        self.call(None, "lockWallet", &[]).await.map(drop)
    }

    async fn unlock_wallet(&self) -> Result<(), WalletError> {
        self.call(None, "unlockWallet", &[]).await.map(drop)
    }

    async fn current_account(&self) -> Result<Option<Account>, WalletError> {
        self.call_optional(Some("accounts"), "currentAccount").await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, WalletError> {
        let listed: Option<Vec<Account>> = self.call_optional(Some("accounts"), "listAccounts").await?;
        Ok(listed.unwrap_or_default())
    }

    async fn switch_account(&self, address: &str) -> Result<(), WalletError> {
        self.call(Some("accounts"), "switchAccount", &[JsValue::from_str(address)])
            .await
            .map(drop)
    }

    async fn current_network(&self) -> Result<Option<NetworkConfig>, WalletError> {
        self.call_optional(Some("networks"), "getNetwork").await
    }

    async fn list_networks(&self) -> Result<Vec<NetworkConfig>, WalletError> {
        let listed: Option<Vec<NetworkConfig>> = self.call_optional(Some("networks"), "listNetworks").await?;
        Ok(listed.unwrap_or_default())
    }

    async fn switch_network(&self, chain_id: &str) -> Result<(), WalletError> {
        self.call(Some("networks"), "switchToNetworkByChainId", &[JsValue::from_str(chain_id)])
            .await
            .map(drop)
    }
}
