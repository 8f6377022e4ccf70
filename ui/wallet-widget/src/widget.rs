//! A mounted widget: root element, store, skin, open dialog and listeners.

use aw_wallet_core::{ShellView, WidgetConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::Store;
use crate::dom;
use crate::events::{self, Listener};
use crate::modal::{Modal, ModalKind};
use crate::theme::Skin;
use crate::view::{self, Frame};

pub struct Widget {
    root: Element,
    config: WidgetConfig,
    store: Store,
    skin: Cell<Skin>,
    modal: RefCell<Option<Rc<Modal>>>,
    listeners: RefCell<Vec<Listener>>,
}

impl Widget {
    pub fn new(root: Element, config: WidgetConfig, store: Store, skin: Skin) -> Rc<Self> {
        Rc::new(Self {
            root,
            config,
            store,
            skin: Cell::new(skin),
            modal: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Register DOM listeners and re-render on every store change.
    pub fn attach(self: &Rc<Self>) -> Result<(), JsValue> {
        let mut listeners = events::bind_wallet_events(self)?;
        listeners.extend(events::bind_root(self)?);
        *self.listeners.borrow_mut() = listeners;

        let weak = Rc::downgrade(self);
        self.store.watch(move |_| {
            if let Some(widget) = weak.upgrade() {
                widget.render();
            }
        });
        Ok(())
    }

    pub fn render(&self) {
        let state = self.store.snapshot();
        let shell = ShellView::from_state(&state);
        let modal = self.modal.borrow().as_ref().map(|m| (m.kind(), m.view()));
        let html = view::render(&Frame {
            shell: &shell,
            skin: self.skin.get(),
            setup_url: &self.config.setup_url,
            modal,
        });
        dom::set_inner_html(&self.root, &html);
    }

    pub fn open_modal(self: &Rc<Self>, kind: ModalKind) {
        let state = self.store.snapshot();
        let allowed = match kind {
            ModalKind::Account => ShellView::can_switch_account(&state),
            ModalKind::Network => ShellView::can_switch_network(&state),
        };
        let Some(modal) = allowed.then(|| Modal::open(kind, &state)).flatten() else {
            debug!(?kind, "nothing to switch from");
            return;
        };
        let modal = Rc::new(modal);
        *self.modal.borrow_mut() = Some(modal.clone());
        self.render();

        let widget = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            modal.load(widget.store()).await;
            widget.render();
        });
    }

    pub fn close_modal(&self) {
        self.modal.borrow_mut().take();
        self.render();
    }

    pub fn select_in_modal(&self, value: &str) {
        if let Some(modal) = self.modal.borrow().as_ref() {
            modal.select(value);
        }
        self.render();
    }

    /// Closes the dialog once the switch went through; a failure leaves it
    /// open.
    pub async fn submit_modal(self: Rc<Self>) {
        let Some(modal) = self.modal.borrow().clone() else {
            return;
        };
        if let Ok(true) = modal.submit(&self.store).await {
            let still_open = self
                .modal
                .borrow()
                .as_ref()
                .is_some_and(|current| Rc::ptr_eq(current, &modal));
            if still_open {
                self.close_modal();
            }
        }
    }

    pub fn set_skin(&self, name: &str) {
        let Some(skin) = Skin::parse(name) else { return };
        self.skin.set(skin);
        skin.persist();
        self.render();
    }

    pub fn unmount(&self) {
        self.listeners.borrow_mut().clear();
        self.store.clear_watchers();
        self.modal.borrow_mut().take();
        dom::set_inner_html(&self.root, "");
        info!("wallet widget unmounted");
    }
}
