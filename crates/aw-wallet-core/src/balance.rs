//! Balance resolution for the active account on the active network.
//!
//! Only the network's first currency is considered. Amounts are parsed into a
//! 256-bit unsigned integer, the width of a Cosmos `sdk.Int`, and scaled by
//! moving the decimal point in their digit string. No float is involved.

use aw_api_types::{Account, Coin, Currency, NetworkConfig};
use aw_chain_client::BankQuery;
use ruint::aliases::U256;

use crate::WalletError;

/// Minimal (exponent 0) and display (exponent == decimals) unit names.
/// Either is empty when the currency declares no matching unit.
pub fn denoms(currency: &Currency) -> (&str, &str) {
    let unit_with = |exponent: u32| {
        currency
            .denom_units
            .iter()
            .find(|unit| unit.exponent == exponent)
            .map(|unit| unit.name.as_str())
            .unwrap_or_default()
    };
    (unit_with(0), unit_with(currency.decimals))
}

/// Render `amount` minimal units as `"{amount / 10^decimals} {DENOM}"` with
/// exactly `decimals` fractional digits.
pub fn format_amount(amount: &str, decimals: u32, display_denom: &str) -> Result<String, WalletError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WalletError::InvalidAmount {
            denom: display_denom.to_owned(),
            amount: amount.to_owned(),
        });
    }
    let units = U256::from_str_radix(amount, 10).map_err(|_| WalletError::AmountOutOfRange {
        amount: amount.to_owned(),
        decimals,
    })?;
    let denom = display_denom.to_uppercase();
    if decimals == 0 {
        return Ok(format!("{units} {denom}"));
    }

    // At least one integer digit ahead of the fraction.
    let scale = decimals as usize;
    let digits = format!("{:0>width$}", units.to_string(), width = scale + 1);
    let (whole, fraction) = digits.split_at(digits.len() - scale);
    Ok(format!("{whole}.{fraction} {denom}"))
}

/// Pick the minimal-denomination entry out of `balances` and format it for
/// display. A missing entry renders as `"0 {DENOM}"`.
pub fn format_balance(network: &NetworkConfig, balances: &[Coin]) -> Result<String, WalletError> {
    let currency = network
        .currencies
        .first()
        .ok_or_else(|| WalletError::NoCurrency {
            chain_id: network.chain_id.clone(),
        })?;
    let (minimal_denom, display_denom) = denoms(currency);

    match balances.iter().find(|coin| coin.denom == minimal_denom) {
        Some(coin) => format_amount(&coin.amount, currency.decimals, display_denom),
        None => Ok(format!("0 {}", display_denom.to_uppercase())),
    }
}

/// Issues the bank query and formats the result.
pub struct BalanceResolver<Q> {
    query: Q,
}

impl<Q: BankQuery> BalanceResolver<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    pub async fn resolve(&self, network: &NetworkConfig, account: &Account) -> Result<String, WalletError> {
        // Fail before touching the network when the currency table is unusable.
        if network.currencies.is_empty() {
            return Err(WalletError::NoCurrency {
                chain_id: network.chain_id.clone(),
            });
        }

        let balances = self
            .query
            .all_balances(&network.rest_url, &account.bech32_address)
            .await
            .map_err(|err| WalletError::BalanceQuery(format!("{err:#}")))?;

        format_balance(network, &balances)
    }
}
