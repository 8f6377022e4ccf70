use anyhow::{Context, Result};
use async_trait::async_trait;
use aw_api_types::{BalancesResponse, Coin};
use aw_chain_client::{BankQuery, DEFAULT_PAGE_LIMIT, balances_url};
use tracing::{debug, warn};

/// HTTP adapter for the Cosmos SDK bank module REST route.
///
/// Works on native targets and in the browser, where `reqwest` is backed by
/// `fetch`.
pub struct CosmosRestClient {
    http: reqwest::Client,
    page_limit: u32,
}

impl Default for CosmosRestClient {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl CosmosRestClient {
    pub fn new(page_limit: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            page_limit,
        }
    }
}

#[async_trait(?Send)]
impl BankQuery for CosmosRestClient {
    async fn all_balances(&self, rest_url: &str, address: &str) -> Result<Vec<Coin>> {
        let url = balances_url(rest_url, address, self.page_limit);
        debug!(%url, "querying bank balances");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("bank balances transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("bank balances HTTP {status}: {text}");
        }

        let body: BalancesResponse = response
            .json()
            .await
            .context("bank balances parse")?;

        let truncated = body
            .pagination
            .as_ref()
            .and_then(|page| page.next_key.as_deref())
            .is_some_and(|key| !key.is_empty());
        if truncated {
            warn!(address, limit = self.page_limit, "bank balances truncated at page limit");
        }

        Ok(body.balances)
    }
}
