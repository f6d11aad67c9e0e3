//! The wallet seam: anything that can hand the dashboard a public address.

use api::wallet_address::WalletAddress;
use thiserror::Error;

/// Shown when no usable wallet is present.
pub const WALLET_MISSING_NOTICE: &str = "Solana object not found! Get a Phantom Wallet 👻";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no compatible wallet found")]
    Unavailable,
    #[error("wallet connection rejected: {0}")]
    Rejected(String),
    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// A source of wallet connections.
///
/// The browser build talks to the Phantom extension, the native build uses a
/// configured watch-only address, and tests use fakes.
pub trait WalletProvider {
    /// Whether a wallet of the expected kind is present.
    fn is_available(&self) -> bool;

    /// Asks the wallet to connect. May wait on user approval.
    async fn connect(&self) -> Result<WalletAddress, WalletError>;
}

/// A read-only "wallet" that always connects to a preconfigured address.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatchOnlyWallet {
    address: Option<WalletAddress>,
}

impl WatchOnlyWallet {
    pub fn new(address: Option<WalletAddress>) -> Self {
        Self { address }
    }
}

impl WalletProvider for WatchOnlyWallet {
    fn is_available(&self) -> bool {
        self.address.is_some()
    }

    async fn connect(&self) -> Result<WalletAddress, WalletError> {
        self.address.clone().ok_or(WalletError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn watch_only_wallet_connects_to_configured_address() {
        let wallet = WatchOnlyWallet::new(Some(WalletAddress::new("9xQeW...k3Lp")));

        assert!(wallet.is_available());
        assert_eq!(wallet.connect().await, Ok(WalletAddress::new("9xQeW...k3Lp")));
    }

    #[tokio::test]
    async fn unconfigured_watch_only_wallet_is_unavailable() {
        let wallet = WatchOnlyWallet::default();

        assert!(!wallet.is_available());
        assert_eq!(wallet.connect().await, Err(WalletError::Unavailable));
    }
}
