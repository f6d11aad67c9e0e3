use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum RpcConnectionStatus {
    Connected,
    Disconnected(String),
}

#[derive(Clone, Copy)]
pub struct RpcChecker {
    status: Signal<RpcConnectionStatus>,
}

impl RpcChecker {
    /// Checks a result by reference without consuming it.
    /// Returns `true` if the result is Ok.
    /// If Err, checks if it is a connection error and updates global status if so.
    pub fn check_result_ref<T>(&mut self, result: &Result<T, ApiError>) -> bool {
        match result {
            Ok(_) => {
                // If we were disconnected, we are back now.
                if self.status.peek().is_disconnected() {
                    self.status.set(RpcConnectionStatus::Connected);
                }
                true
            }
            Err(e) => {
                if is_connection_error(e) {
                    let error_msg = e.to_string();
                    dioxus_logger::tracing::warn!("RPC connection error: {}", error_msg);
                    self.status
                        .set(RpcConnectionStatus::Disconnected(error_msg));
                }
                false
            }
        }
    }

    /// Returns the read-only signal for the connection status.
    /// Call .read() on this in a component/resource to subscribe to changes.
    pub fn status(&self) -> Signal<RpcConnectionStatus> {
        self.status
    }
}

/// Does this error mean the RPC endpoint (or our own server) is unreachable?
///
/// Errors from server functions arrive wrapped in [`ServerFnError`]. A failed
/// request never reached the server; a `ServerError` carries the server's own
/// message, which is judged on its text alone.
pub fn is_connection_error(err: &ApiError) -> bool {
    match err.downcast_ref::<ServerFnError>() {
        Some(ServerFnError::Request(_)) | Some(ServerFnError::StreamError(_)) => true,
        Some(ServerFnError::ServerError { message, .. }) => is_connection_message(message),
        Some(_) => false,
        None => is_connection_message(&err.to_string()),
    }
}

/// Heuristic over the text of a server-side failure.
fn is_connection_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("connection refused")
        || msg.contains("network unreachable")
        || msg.contains("connection reset")
        || msg.contains("failed to connect")
        || msg.contains("rpc transport error")
        || msg.contains("timed out")
        || msg.contains("http 429")
        || msg.contains("http 502")
        || msg.contains("http 503")
        || msg.contains("connection to the server was already shutdown")
        || msg.contains("channel closed")
}

pub fn use_rpc_checker() -> RpcChecker {
    let status = use_context::<Signal<RpcConnectionStatus>>();
    RpcChecker { status }
}
