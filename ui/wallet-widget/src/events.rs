//! Event wiring.
//!
//! Every DOM subscription is held as a [`Listener`]; dropping it removes the
//! callback, so unmounting is a matter of dropping the widget's listeners.

use aw_wallet_core::{WalletEvent, events as wallet_events};
use std::rc::{Rc, Weak};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::dom;
use crate::widget::Widget;

pub struct Listener {
    target: EventTarget,
    name: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        name: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            name: name.to_owned(),
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.name, self.callback.as_ref().unchecked_ref());
    }
}

/// Subscribe to the two notifications the extension dispatches on `window`.
pub fn bind_wallet_events(widget: &Rc<Widget>) -> Result<Vec<Listener>, JsValue> {
    let window: EventTarget = dom::window()?.into();
    let config = widget.config();
    [WalletEvent::StatusChanged, WalletEvent::KeystoreChanged]
        .into_iter()
        .map(|event| {
            let weak = Rc::downgrade(widget);
            Listener::new(&window, event.name(config), move |_| {
                let Some(widget) = weak.upgrade() else { return };
                debug!(?event, "wallet notification");
                wasm_bindgen_futures::spawn_local(async move {
                    wallet_events::dispatch(widget.store(), event).await;
                });
            })
        })
        .collect()
}

// ── Root delegation ──

/// Click and change handling for everything rendered inside the root.
pub fn bind_root(widget: &Rc<Widget>) -> Result<Vec<Listener>, JsValue> {
    let root: EventTarget = widget.root().clone().into();
    let click = {
        let weak = Rc::downgrade(widget);
        Listener::new(&root, "click", move |event| on_click(&weak, &event))?
    };
    let change = {
        let weak = Rc::downgrade(widget);
        Listener::new(&root, "change", move |event| on_change(&weak, &event))?
    };
    Ok(vec![click, change])
}

fn on_click(weak: &Weak<Widget>, event: &Event) {
    let Some(widget) = weak.upgrade() else { return };
    let Some(el) = dom::action_target(event) else { return };
    let action = dom::action_of(&el);
    match action.as_str() {
        "unlock" => spawn_bridge_call(widget, "unlock", |w| async move { w.store().unlock_wallet().await }),
        "sign-out" => spawn_bridge_call(widget, "sign-out", |w| async move { w.store().lock_wallet().await }),
        "open-account" => widget.open_modal(crate::modal::ModalKind::Account),
        "open-network" => widget.open_modal(crate::modal::ModalKind::Network),
        "close-modal" => widget.close_modal(),
        "submit-modal" => wasm_bindgen_futures::spawn_local(async move { widget.submit_modal().await }),
        _ => {}
    }
}

fn on_change(weak: &Weak<Widget>, event: &Event) {
    let Some(widget) = weak.upgrade() else { return };
    let Some(el) = dom::action_target(event) else { return };
    let Some(value) = dom::select_value(&el) else { return };
    match dom::action_of(&el).as_str() {
        "skin" => widget.set_skin(&value),
        "pick" => widget.select_in_modal(&value),
        _ => {}
    }
}

/// Lock and unlock report back only through the status notification.
fn spawn_bridge_call<F, Fut>(widget: Rc<Widget>, action: &'static str, call: F)
where
    F: FnOnce(Rc<Widget>) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), aw_wallet_core::WalletError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = call(widget).await {
            warn!(error = %err, action, "wallet call failed");
        }
    });
}
