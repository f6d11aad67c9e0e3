//! The dashboard's three operations, written against the wallet and ledger
//! seams so they can run outside a live Dioxus runtime.

use api::wallet_address::WalletAddress;
use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::dashboard_state::DashboardState;
use crate::ledger::LedgerReader;
use crate::wallet::WalletError;
use crate::wallet::WalletProvider;
use crate::wallet::WALLET_MISSING_NOTICE;

/// Somewhere the dashboard state lives.
pub trait DashboardStore {
    fn update(&self, f: impl FnOnce(&mut DashboardState));
}

impl DashboardStore for Signal<DashboardState> {
    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        let mut signal = *self;
        f(&mut *signal.write());
    }
}

/// How a connect attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectOutcome {
    Connected(WalletAddress),
    WalletUnavailable,
    Declined(WalletError),
}

pub async fn load_blockhash<L: LedgerReader, S: DashboardStore>(ledger: &L, store: &S) {
    let result = ledger.latest_blockhash().await;
    if let Err(e) = &result {
        warn!("failed to fetch latest blockhash: {}", e);
    }
    store.update(|state| state.apply_blockhash(result));
}

pub async fn load_epoch_info<L: LedgerReader, S: DashboardStore>(ledger: &L, store: &S) {
    let result = ledger.epoch_info().await;
    if let Err(e) = &result {
        warn!("failed to fetch epoch info: {}", e);
    }
    store.update(|state| state.apply_epoch_info(result));
}

/// Mount-time reads. Both run concurrently and each writes only its own field
/// as soon as it completes.
pub async fn initialize_network_info<L: LedgerReader, S: DashboardStore>(ledger: &L, store: &S) {
    futures::join!(load_blockhash(ledger, store), load_epoch_info(ledger, store));
}

/// Reads the balance of `address` and stores it if `address` is still the
/// connected wallet.
pub async fn fetch_balance<L: LedgerReader, S: DashboardStore>(
    ledger: &L,
    store: &S,
    address: &WalletAddress,
) {
    let result = ledger.balance(address).await;
    if let Err(e) = &result {
        warn!("failed to fetch balance of {}: {}", address, e);
    }
    store.update(|state| {
        if !state.apply_balance(address, result) {
            info!("discarding balance of superseded wallet {}", address);
        }
    });
}

/// Connects the wallet, then chains into a balance read for its address.
///
/// Not deduplicated: overlapping calls each run to completion and the
/// address that resolves last is the one displayed.
pub async fn connect_wallet<W, L, S>(wallet: &W, ledger: &L, store: &S) -> ConnectOutcome
where
    W: WalletProvider,
    L: LedgerReader,
    S: DashboardStore,
{
    if !wallet.is_available() {
        warn!("wallet connect requested but no compatible wallet is present");
        store.update(|state| state.show_wallet_notice(WALLET_MISSING_NOTICE));
        return ConnectOutcome::WalletUnavailable;
    }

    store.update(|state| state.begin_connection());
    let result = wallet.connect().await;
    store.update(|state| state.finish_connection());

    match result {
        Ok(address) => {
            info!("wallet connected: {}", address);
            store.update(|state| state.apply_wallet_connected(address.clone()));
            fetch_balance(ledger, store, &address).await;
            ConnectOutcome::Connected(address)
        }
        Err(e) => {
            error!("wallet connection failed: {}", e);
            ConnectOutcome::Declined(e)
        }
    }
}
