// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::config::DashboardConfig;
    use api::wallet_address::WalletAddress;
    use dioxus_logger::tracing::Level;
    use js_sys::Function;
    use js_sys::Promise;
    use js_sys::Reflect;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use crate::wallet::WalletError;
    use crate::wallet::WalletProvider;

    pub type PlatformWallet = PhantomWallet;

    /// The browser has no env vars; the server half logs at its own configured level.
    pub fn log_level() -> Level {
        Level::INFO
    }

    /// The browser always uses the injected extension; the watch address is ignored.
    pub fn platform_wallet(_config: &DashboardConfig) -> PlatformWallet {
        PhantomWallet
    }

    /// The Phantom browser extension, injected as `window.solana`.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct PhantomWallet;

    impl PhantomWallet {
        fn injected() -> Option<JsValue> {
            let window: JsValue = web_sys::window()?.into();
            let solana = Reflect::get(&window, &JsValue::from_str("solana")).ok()?;
            if solana.is_undefined() || solana.is_null() {
                None
            } else {
                Some(solana)
            }
        }

        fn method(target: &JsValue, name: &str) -> Result<Function, WalletError> {
            Reflect::get(target, &JsValue::from_str(name))
                .map_err(describe)?
                .dyn_into::<Function>()
                .map_err(|_| WalletError::Provider(format!("`{}` is not a function", name)))
        }
    }

    impl WalletProvider for PhantomWallet {
        fn is_available(&self) -> bool {
            Self::injected()
                .and_then(|solana| Reflect::get(&solana, &JsValue::from_str("isPhantom")).ok())
                .and_then(|flag| flag.as_bool())
                .unwrap_or(false)
        }

        async fn connect(&self) -> Result<WalletAddress, WalletError> {
            let solana = Self::injected().ok_or(WalletError::Unavailable)?;

            let promise: Promise = Self::method(&solana, "connect")?
                .call0(&solana)
                .map_err(describe)?
                .dyn_into()
                .map_err(|_| WalletError::Provider("connect did not return a promise".to_string()))?;

            let response = JsFuture::from(promise)
                .await
                .map_err(|e| WalletError::Rejected(js_message(&e)))?;

            let public_key =
                Reflect::get(&response, &JsValue::from_str("publicKey")).map_err(describe)?;
            let address = Self::method(&public_key, "toString")?
                .call0(&public_key)
                .map_err(describe)?
                .as_string()
                .ok_or_else(|| WalletError::Provider("publicKey is not printable".to_string()))?;

            Ok(WalletAddress::new(address))
        }
    }

    fn js_message(value: &JsValue) -> String {
        Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value))
    }

    fn describe(value: JsValue) -> WalletError {
        WalletError::Provider(js_message(&value))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::config::DashboardConfig;
    use dioxus_logger::tracing::Level;

    use crate::wallet::WatchOnlyWallet;

    pub type PlatformWallet = WatchOnlyWallet;

    pub fn log_level() -> Level {
        DashboardConfig::from_env().log_level()
    }

    /// Native builds have no browser extension. A configured watch address,
    /// if any, stands in for it.
    pub fn platform_wallet(config: &DashboardConfig) -> PlatformWallet {
        WatchOnlyWallet::new(config.watch_address().cloned())
    }
}
