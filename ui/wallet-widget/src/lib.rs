//! ASI Wallet widget for the browser.
//!
//! Mounts into a host element, detects the wallet extension, keeps the
//! shared store in sync through the extension's notifications and renders
//! the result in one of two skins.

pub mod bridge;
pub mod config;
pub mod dom;
pub mod events;
pub mod logging;
pub mod modal;
pub mod theme;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;
pub mod view;
pub mod widget;

use aw_chain_cosmos::CosmosRestClient;
use aw_wallet_core::{ShellView, WalletStore, WidgetConfig};
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use crate::bridge::JsWalletBridge;
use crate::theme::Skin;
use crate::view::Frame;
use crate::widget::Widget;

pub type Store = WalletStore<JsWalletBridge, CosmosRestClient>;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Handle returned to the host page by [`mount`].
#[wasm_bindgen]
pub struct WalletWidget {
    inner: Option<Rc<Widget>>,
}

#[wasm_bindgen]
impl WalletWidget {
    /// Remove every listener and clear the root. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(widget) = self.inner.take() {
            widget.unmount();
        }
    }
}

/// Render the widget into the element with id `root_id`.
#[wasm_bindgen]
pub async fn mount(root_id: String) -> Result<WalletWidget, JsValue> {
    let loaded = config::load();
    logging::init(loaded.as_ref().map_or("info", |c| c.log_filter.as_str()));
    let config = loaded.unwrap_or_else(|err| {
        warn!(error = %err, "ignoring malformed {}", config::CONFIG_GLOBAL);
        WidgetConfig::default()
    });

    let root = dom::by_id(&root_id)?;
    let skin = Skin::restore(&config.default_skin);
    dom::set_inner_html(
        &root,
        &view::render(&Frame {
            shell: &ShellView::Initialising { wallet_found: true },
            skin,
            setup_url: &config.setup_url,
            modal: None,
        }),
    );

    let bridge = JsWalletBridge::detect(&config).await;
    let store = WalletStore::new(bridge, CosmosRestClient::new(config.balance_page_limit));
    let widget = Widget::new(root, config, store, skin);
    widget.attach()?;
    widget.render();
    info!(%root_id, "wallet widget mounted");

    let syncing = widget.clone();
    wasm_bindgen_futures::spawn_local(async move {
        aw_wallet_core::on_mount(syncing.store()).await;
    });

    Ok(WalletWidget { inner: Some(widget) })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const STATUS_EVENT: &str = "fetchwallet_walletstatuschange";

    #[wasm_bindgen_test]
    async fn unmount_detaches_wallet_notifications() {
        let wallet = testing::install_wallet("awMountWallet");
        testing::configure_page("awMountWallet");
        gloo_utils::body()
            .insert_adjacent_html("beforeend", r#"<div id="aw-mount-root"></div>"#)
            .unwrap();

        let mut widget = mount("aw-mount-root".to_owned()).await.unwrap();
        TimeoutFuture::new(20).await;
        let root = dom::by_id("aw-mount-root").unwrap();
        assert!(!root.inner_html().is_empty());
        let synced = testing::number(&wallet, "statusCalls");
        assert!(synced >= 1.0);

        testing::fire(STATUS_EVENT);
        TimeoutFuture::new(20).await;
        let notified = testing::number(&wallet, "statusCalls");
        assert_eq!(notified, synced + 1.0);

        widget.unmount();
        assert_eq!(root.inner_html(), "");
        testing::fire(STATUS_EVENT);
        TimeoutFuture::new(20).await;
        assert_eq!(testing::number(&wallet, "statusCalls"), notified);

        // A second unmount is a no-op.
        widget.unmount();
    }
}
