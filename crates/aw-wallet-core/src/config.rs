use aw_chain_client::DEFAULT_PAGE_LIMIT;
use serde::Deserialize;

/// Host-page overrides for the widget. Every field has a default, so an
/// empty object (or no object at all) yields a working configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Name of the `window` property the extension injects.
    pub bridge_global: String,
    pub status_event: String,
    pub keystore_event: String,
    pub balance_page_limit: u32,
    /// Lookups of the injected object before declaring it absent.
    pub detect_attempts: u32,
    pub detect_interval_ms: u32,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
    pub setup_url: String,
    pub default_skin: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            bridge_global: "fetchBrowserWallet".to_owned(),
            status_event: "fetchwallet_walletstatuschange".to_owned(),
            keystore_event: "fetchwallet_keystorechange".to_owned(),
            balance_page_limit: DEFAULT_PAGE_LIMIT,
            detect_attempts: 10,
            detect_interval_ms: 100,
            log_filter: "info".to_owned(),
            setup_url: "https://fetch.ai/docs/guides/fetch-network/fetch-wallet/web-wallet/get-started"
                .to_owned(),
            default_skin: "classic".to_owned(),
        }
    }
}
