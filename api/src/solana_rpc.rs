//! A minimal Solana JSON-RPC client covering the three reads the dashboard needs.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use dioxus_logger::tracing::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::DashboardConfig;
use crate::epoch_info::EpochInfo;
use crate::sol_amount::SolAmount;
use crate::wallet_address::WalletAddress;
use crate::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("rpc transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rpc endpoint returned http {status}: {body}")]
    Status { status: u16, body: String },
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("no result in rpc response")]
    MissingResult,
    #[error("malformed rpc response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Wrapper used by methods that report the slot they were evaluated at.
#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestBlockhash {
    blockhash: String,
}

/// Decodes a JSON-RPC response body into its `result`.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, RpcError> {
    let response: RpcResponse<T> = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(RpcError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    response.result.ok_or(RpcError::MissingResult)
}

pub struct SolanaRpcClient {
    url: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl SolanaRpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            url: url.into(),
            http,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("rpc call #{}: {} {}", id, method, params);

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_response(&body)
    }

    /// Spendable balance of `address`.
    pub async fn get_balance(&self, address: &WalletAddress) -> Result<SolAmount, RpcError> {
        let response: WithContext<u64> = self.call("getBalance", json!([address.as_str()])).await?;
        Ok(SolAmount::from_lamports(response.value))
    }

    /// Most recent block hash, base58 encoded.
    pub async fn get_latest_blockhash(&self) -> Result<String, RpcError> {
        let response: WithContext<LatestBlockhash> = self.call("getLatestBlockhash", json!([])).await?;
        Ok(response.value.blockhash)
    }

    pub async fn get_epoch_info(&self) -> Result<EpochInfo, RpcError> {
        self.call("getEpochInfo", json!([])).await
    }
}

/// Returns the process-wide client, creating it on first use.
pub async fn rpc_client() -> Result<&'static SolanaRpcClient, ApiError> {
    static CLIENT: OnceCell<SolanaRpcClient> = OnceCell::const_new();

    let client = CLIENT
        .get_or_try_init(|| async {
            let config = DashboardConfig::from_env();
            dioxus_logger::tracing::info!("using solana rpc endpoint {}", config.rpc_url());
            SolanaRpcClient::new(config.rpc_url())
        })
        .await?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use mockito::Matcher;
    use mockito::Server;

    use super::*;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[test]
    fn decode_response_returns_result() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":9},"value":42}}"#;
        let decoded: WithContext<u64> = decode_response(body).unwrap();
        assert_eq!(decoded.value, 42);
    }

    #[test]
    fn decode_response_surfaces_rpc_error() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid param: WrongSize"}}"#;
        let err = decode_response::<Value>(body).unwrap_err();

        match err {
            RpcError::Rpc { code, message } => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid param: WrongSize");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_response_without_result_is_an_error() {
        let body = r#"{"jsonrpc":"2.0","id":1}"#;
        assert!(matches!(decode_response::<Value>(body), Err(RpcError::MissingResult)));
    }

    #[test]
    fn decode_response_rejects_garbage() {
        assert!(matches!(decode_response::<Value>("<html>"), Err(RpcError::Decode(_))));
    }

    #[tokio::test]
    async fn get_balance_sends_address_and_reads_lamports() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(
                r#""method"\s*:\s*"getBalance".*"params"\s*:\s*\[\s*"9xQeW\.\.\.k3Lp"\s*\]"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":2500000000}}"#)
            .create_async()
            .await;

        let client = SolanaRpcClient::new(server.url()).expect("client");
        let balance = client
            .get_balance(&WalletAddress::new("9xQeW...k3Lp"))
            .await
            .expect("balance");

        assert_eq!(balance.as_lamports(), 2_500_000_000);
        assert_eq!(balance.to_string(), "2.5");
    }

    #[tokio::test]
    async fn get_latest_blockhash_unwraps_value() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"getLatestBlockhash""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":2792},"value":{"blockhash":"EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N","lastValidBlockHeight":3090}}}"#,
            )
            .create_async()
            .await;

        let client = SolanaRpcClient::new(server.url()).expect("client");
        let blockhash = client.get_latest_blockhash().await.expect("blockhash");

        assert_eq!(blockhash, "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N");
    }

    #[tokio::test]
    async fn get_epoch_info_parses_counters() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"getEpochInfo""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"result":{"absoluteSlot":999999,"blockHeight":888888,"epoch":5,"slotIndex":120,"slotsInEpoch":432000,"transactionCount":777777}}"#,
            )
            .create_async()
            .await;

        let client = SolanaRpcClient::new(server.url()).expect("client");
        let info = client.get_epoch_info().await.expect("epoch info");

        assert_eq!(info.epoch, 5);
        assert_eq!(info.slot_index, 120);
        assert_eq!(info.slots_in_epoch, 432000);
        assert_eq!(info.absolute_slot, 999999);
        assert_eq!(info.block_height, 888888);
        assert_eq!(info.transaction_count, Some(777777));
    }

    #[tokio::test]
    async fn http_failure_is_reported_with_status() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .with_status(429)
            .with_body("Too many requests")
            .create_async()
            .await;

        let client = SolanaRpcClient::new(server.url()).expect("client");
        let err = client.get_epoch_info().await.unwrap_err();

        match err {
            RpcError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "Too many requests");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
