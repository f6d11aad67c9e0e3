//! The ledger seam: the three read-only queries the dashboard makes.

use api::epoch_info::EpochInfo;
use api::sol_amount::SolAmount;
use api::wallet_address::WalletAddress;
use api::ApiError;

use crate::hooks::use_rpc_checker::RpcChecker;

/// Read access to the remote ledger.
pub trait LedgerReader {
    async fn latest_blockhash(&self) -> Result<String, ApiError>;

    async fn epoch_info(&self) -> Result<EpochInfo, ApiError>;

    async fn balance(&self, address: &WalletAddress) -> Result<SolAmount, ApiError>;
}

/// Reads the ledger through the fullstack server functions and reports every
/// outcome to the shared [`RpcChecker`].
#[derive(Clone, Copy)]
pub struct ServerLedger {
    checker: RpcChecker,
}

impl ServerLedger {
    pub fn new(checker: RpcChecker) -> Self {
        Self { checker }
    }

    fn observe<T>(&self, result: &Result<T, ApiError>) {
        let mut checker = self.checker;
        checker.check_result_ref(result);
    }
}

impl LedgerReader for ServerLedger {
    async fn latest_blockhash(&self) -> Result<String, ApiError> {
        let result = api::latest_blockhash().await;
        self.observe(&result);
        result
    }

    async fn epoch_info(&self) -> Result<EpochInfo, ApiError> {
        let result = api::epoch_info().await;
        self.observe(&result);
        result
    }

    async fn balance(&self, address: &WalletAddress) -> Result<SolAmount, ApiError> {
        let result = api::balance(address.clone()).await;
        self.observe(&result);
        result
    }
}
