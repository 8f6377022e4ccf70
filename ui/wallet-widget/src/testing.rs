//! Scripted stand-in for the object the extension injects, for browser tests.

use aw_wallet_core::WidgetConfig;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::dom;

/// Installs `window[global] = { wallet }` and returns the wallet. It reports
/// status 3, no current account, two listed accounts and no networks, and
/// rejects `getNetwork`. Status reads are counted in `statusCalls`; switch
/// targets are appended to `switched`.
const SCRIPTED_WALLET: &str = r#"
const wallet = {
  reportedStatus: 3,
  statusCalls: 0,
  switched: [],
  status: () => { wallet.statusCalls += 1; return Promise.resolve(wallet.reportedStatus); },
  lockWallet: () => Promise.resolve(),
  unlockWallet: () => Promise.resolve(),
  accounts: {
    currentAccount: () => Promise.resolve(undefined),
    listAccounts: () => Promise.resolve([{ bech32Address: "fetch1aaa" }, { bech32Address: "fetch1bbb" }]),
    switchAccount: (address) => { wallet.switched.push(address); return Promise.resolve(); },
  },
  networks: {
    getNetwork: () => Promise.reject(new Error("keyring locked")),
    listNetworks: () => Promise.resolve(null),
    switchToNetworkByChainId: (chainId) => { wallet.switched.push(chainId); return Promise.resolve(); },
  },
};
window[global] = { wallet };
return wallet;
"#;

pub(crate) fn install_wallet(global: &str) -> JsValue {
    Function::new_with_args("global", SCRIPTED_WALLET)
        .call1(&JsValue::NULL, &JsValue::from_str(global))
        .unwrap()
}

pub(crate) fn set_global(name: &str, value: &JsValue) {
    Reflect::set(&dom::window().unwrap(), &JsValue::from_str(name), value).unwrap();
}

/// Page-level overrides pointing the widget at `global`.
pub(crate) fn configure_page(global: &str) {
    let overrides = Object::new();
    set(&overrides, "bridgeGlobal", &JsValue::from_str(global));
    set(&overrides, "detectAttempts", &JsValue::from_f64(1.0));
    set_global(crate::config::CONFIG_GLOBAL, &overrides);
}

pub(crate) fn config_for(global: &str) -> WidgetConfig {
    WidgetConfig {
        bridge_global: global.to_owned(),
        detect_attempts: 1,
        detect_interval_ms: 1,
        ..WidgetConfig::default()
    }
}

pub(crate) fn set(target: &JsValue, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).unwrap();
}

pub(crate) fn number(target: &JsValue, key: &str) -> f64 {
    Reflect::get(target, &JsValue::from_str(key))
        .unwrap()
        .as_f64()
        .unwrap_or_default()
}

pub(crate) fn strings(target: &JsValue, key: &str) -> Vec<String> {
    let values: Array = Reflect::get(target, &JsValue::from_str(key)).unwrap().unchecked_into();
    values.iter().filter_map(|value| value.as_string()).collect()
}

/// Dispatch a bare event named `name` on `window`.
pub(crate) fn fire(name: &str) {
    let window: EventTarget = dom::window().unwrap().into();
    window.dispatch_event(&Event::new(name).unwrap()).unwrap();
}
