use anyhow::Result;
use async_trait::async_trait;
use aw_api_types::Coin;
use std::rc::Rc;

/// Page size requested from the bank module; large enough that a single
/// request returns every denomination an account holds.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

/// Source of on-chain bank balances for an address.
///
/// Implementations are single-threaded: in the browser the underlying
/// `fetch` futures are not `Send`.
#[async_trait(?Send)]
pub trait BankQuery {
    async fn all_balances(&self, rest_url: &str, address: &str) -> Result<Vec<Coin>>;
}

#[async_trait(?Send)]
impl<T: BankQuery + ?Sized> BankQuery for Rc<T> {
    async fn all_balances(&self, rest_url: &str, address: &str) -> Result<Vec<Coin>> {
        (**self).all_balances(rest_url, address).await
    }
}

/// `{rest_url}/cosmos/bank/v1beta1/balances/{address}?pagination.limit={limit}`
pub fn balances_url(rest_url: &str, address: &str, limit: u32) -> String {
    format!(
        "{}/cosmos/bank/v1beta1/balances/{}?pagination.limit={}",
        rest_url.trim_end_matches('/'),
        address,
        limit
    )
}
