use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The public identifier of a connected wallet.
///
/// Treated as opaque: no base58 or length validation is performed. The node
/// rejects malformed addresses itself and that error is surfaced as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for WalletAddress {
    fn from(address: &str) -> Self {
        Self(address.to_owned())
    }
}
