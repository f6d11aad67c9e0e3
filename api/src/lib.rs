//! This crate contains all shared fullstack server functions.

pub mod config;
pub mod epoch_info;
pub mod sol_amount;
#[cfg(not(target_arch = "wasm32"))]
pub mod solana_rpc;
pub mod wallet_address;

use config::DashboardConfig;
use dioxus::prelude::*;
use epoch_info::EpochInfo;
use sol_amount::SolAmount;
use wallet_address::WalletAddress;

pub type ApiError = anyhow::Error;

/// Retrieves the dashboard settings.
///
/// Read from env vars on the server so the browser never needs them.
#[post("/api/dashboard_config")]
pub async fn dashboard_config() -> Result<DashboardConfig, ApiError> {
    Ok(DashboardConfig::from_env())
}

#[post("/api/latest_blockhash")]
pub async fn latest_blockhash() -> Result<String, ApiError> {
    let client = solana_rpc::rpc_client().await?;

    let blockhash = client.get_latest_blockhash().await?;
    dioxus_logger::tracing::debug!("latest blockhash: {}", blockhash);

    Ok(blockhash)
}

#[post("/api/epoch_info")]
pub async fn epoch_info() -> Result<EpochInfo, ApiError> {
    let client = solana_rpc::rpc_client().await?;

    let info = client.get_epoch_info().await?;
    dioxus_logger::tracing::debug!("epoch info: {:?}", info);

    Ok(info)
}

#[post("/api/balance")]
pub async fn balance(address: WalletAddress) -> Result<SolAmount, ApiError> {
    let client = solana_rpc::rpc_client().await?;

    let balance = client.get_balance(&address).await?;
    dioxus_logger::tracing::info!("balance of {}: {} SOL", address, balance);

    Ok(balance)
}
