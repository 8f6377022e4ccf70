//! Target-independent core of the wallet widget: the extension seam, balance
//! formatting, the shared state store and the view models rendered by the
//! browser crate.

pub mod balance;
pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod picker;
pub mod sequence;
pub mod shell;
pub mod store;

#[cfg(test)]
mod testing;

pub use balance::{BalanceResolver, format_amount, format_balance};
pub use bridge::WalletBridge;
pub use config::WidgetConfig;
pub use error::WalletError;
pub use events::{WalletEvent, dispatch, on_mount};
pub use picker::{Pickable, Picker, PickerOption, PickerSource, PickerView};
pub use shell::{BALANCE_UNAVAILABLE, DetailsView, ShellView};
pub use store::{BalanceView, WalletState, WalletStore};
