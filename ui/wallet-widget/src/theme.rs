//! Skin selection.
//!
//! Two styling variants of the same markup: `classic` uses the widget's own
//! stylesheet class names, `tailwind` uses utility classes for hosts that ship
//! Tailwind. The chosen skin persists in `localStorage`.

use gloo_storage::{LocalStorage, Storage};
use tracing::debug;

const SKIN_KEY: &str = "aw_widget_skin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Classic,
    Tailwind,
}

/// Class names per element role.
pub struct Classes {
    pub root: &'static str,
    pub header: &'static str,
    pub title: &'static str,
    pub notice: &'static str,
    pub muted: &'static str,
    pub link: &'static str,
    pub actions: &'static str,
    pub button: &'static str,
    pub button_primary: &'static str,
    pub details: &'static str,
    pub row_label: &'static str,
    pub overlay: &'static str,
    pub dialog: &'static str,
    pub dialog_head: &'static str,
    pub close: &'static str,
    pub select: &'static str,
    pub spinner: &'static str,
}

const CLASSIC: Classes = Classes {
    root: "aw-widget",
    header: "aw-header",
    title: "aw-title",
    notice: "aw-notice",
    muted: "aw-muted",
    link: "aw-link",
    actions: "aw-actions",
    button: "aw-button",
    button_primary: "aw-button aw-button-primary",
    details: "aw-details",
    row_label: "aw-row-label",
    overlay: "aw-overlay",
    dialog: "aw-dialog",
    dialog_head: "aw-dialog-head",
    close: "aw-close",
    select: "aw-select",
    spinner: "aw-spinner",
};

const TAILWIND: Classes = Classes {
    root: "min-h-full bg-gray-100 p-6 text-gray-800",
    header: "flex items-center justify-between mb-6",
    title: "text-2xl font-semibold",
    notice: "bg-white rounded-lg shadow p-6 text-center",
    muted: "text-gray-600",
    link: "text-blue-600 underline hover:text-blue-800",
    actions: "flex gap-3 justify-center mb-6",
    button: "px-4 py-2 bg-gray-700 text-white rounded-md hover:bg-gray-800",
    button_primary: "w-full py-3 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50",
    details: "bg-white rounded-lg shadow p-6 space-y-2",
    row_label: "font-semibold mr-2",
    overlay: "fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center z-50",
    dialog: "bg-white rounded-lg shadow-xl w-full sm:w-96 p-8",
    dialog_head: "flex justify-between items-center mb-6",
    close: "text-gray-500 hover:text-gray-700 text-3xl focus:outline-none",
    select: "w-full p-3 border border-gray-300 rounded-md mb-6",
    spinner: "w-8 h-8 border-4 border-gray-600 rounded-full animate-spin",
};

impl Skin {
    pub const ALL: [Skin; 2] = [Skin::Classic, Skin::Tailwind];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::Classic),
            "tailwind" => Some(Self::Tailwind),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Tailwind => "tailwind",
        }
    }

    pub fn classes(self) -> &'static Classes {
        match self {
            Self::Classic => &CLASSIC,
            Self::Tailwind => &TAILWIND,
        }
    }

    /// Stored choice, else the configured default, else classic.
    pub fn restore(default: &str) -> Self {
        LocalStorage::get::<String>(SKIN_KEY)
            .ok()
            .and_then(|stored| Self::parse(&stored))
            .or_else(|| Self::parse(default))
            .unwrap_or(Self::Classic)
    }

    pub fn persist(self) {
        if let Err(err) = LocalStorage::set(SKIN_KEY, self.name()) {
            debug!(error = %err, "skin not persisted");
        }
    }
}
