//! Runtime settings for the dashboard, read from environment variables.

use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::Level;
use serde::Deserialize;
use serde::Serialize;

use crate::wallet_address::WalletAddress;

/// Public devnet endpoint, equivalent to `clusterApiUrl("devnet")`.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Everything the dashboard needs to know before its first render.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    rpc_url: String,
    network_label: String,
    watch_address: Option<WalletAddress>,
    log_level: String,
}

impl DashboardConfig {
    /// Creates a `DashboardConfig` from environment variables, with
    /// in-code defaults pointing at devnet.
    ///
    /// # Environment Variables
    /// - `SOLANA_RPC_URL`: JSON-RPC endpoint. Defaults to the public devnet.
    /// - `SOLANA_NETWORK_LABEL`: name shown on the network card. Defaults to "Devnet".
    /// - `DASHBOARD_WATCH_ADDRESS`: address used by the native watch-only wallet.
    /// - `DASHBOARD_LOG_LEVEL`: "trace", "debug", "info", "warn" or "error".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            rpc_url: non_empty("SOLANA_RPC_URL").unwrap_or_else(|| DEVNET_RPC_URL.to_string()),
            network_label: non_empty("SOLANA_NETWORK_LABEL").unwrap_or_else(|| "Devnet".to_string()),
            watch_address: non_empty("DASHBOARD_WATCH_ADDRESS").map(WalletAddress::from),
            log_level: non_empty("DASHBOARD_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn network_label(&self) -> &str {
        &self.network_label
    }

    pub fn watch_address(&self) -> Option<&WalletAddress> {
        self.watch_address.as_ref()
    }

    /// The configured log level, falling back to `INFO` on unknown values.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_devnet() {
        let config = config_with(&[]);

        assert_eq!(config.rpc_url(), DEVNET_RPC_URL);
        assert_eq!(config.network_label(), "Devnet");
        assert_eq!(config.watch_address(), None);
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("SOLANA_RPC_URL", "http://127.0.0.1:8899"),
            ("SOLANA_NETWORK_LABEL", "Localnet"),
            ("DASHBOARD_WATCH_ADDRESS", "9xQeW...k3Lp"),
            ("DASHBOARD_LOG_LEVEL", "debug"),
        ]);

        assert_eq!(config.rpc_url(), "http://127.0.0.1:8899");
        assert_eq!(config.network_label(), "Localnet");
        assert_eq!(config.watch_address().map(|a| a.as_str()), Some("9xQeW...k3Lp"));
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_with(&[("SOLANA_RPC_URL", "  "), ("DASHBOARD_WATCH_ADDRESS", "")]);

        assert_eq!(config.rpc_url(), DEVNET_RPC_URL);
        assert_eq!(config.watch_address(), None);
    }

    #[test]
    fn unknown_log_level_is_info() {
        let config = config_with(&[("DASHBOARD_LOG_LEVEL", "chatty")]);
        assert_eq!(config.log_level(), Level::INFO);
    }
}
