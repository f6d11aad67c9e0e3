//! The dashboard's view state and the text each field renders as.

use std::fmt::Display;

use api::epoch_info::EpochInfo;
use api::sol_amount::SolAmount;
use api::wallet_address::WalletAddress;

/// Shown for any field that has not been fetched yet.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown in place of the wallet address until a wallet connects.
pub const NOT_CONNECTED: &str = "Not Connected";
/// Shown for any field whose last fetch failed.
pub const UNAVAILABLE: &str = "Unavailable";
/// Number of leading blockhash characters shown on the card.
pub const BLOCKHASH_PREVIEW_CHARS: usize = 10;

/// A remotely fetched value.
#[derive(Clone, Debug, PartialEq, strum::EnumIs)]
pub enum Loadable<T> {
    NotLoaded,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::NotLoaded
    }
}

impl<T> Loadable<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn render(&self, f: impl FnOnce(&T) -> String) -> String {
        match self {
            Self::NotLoaded => NOT_AVAILABLE.to_string(),
            Self::Loaded(value) => f(value),
            Self::Failed(_) => UNAVAILABLE.to_string(),
        }
    }
}

/// One labelled epoch counter, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochField {
    pub label: &'static str,
    pub value: String,
}

/// Everything the dashboard shows. Owned by the dashboard screen and
/// discarded when it unmounts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub balance: Loadable<SolAmount>,
    pub blockhash: Loadable<String>,
    pub epoch_info: Loadable<EpochInfo>,
    pub wallet: Option<WalletAddress>,
    /// Blocking notice shown when no wallet can be used.
    pub wallet_notice: Option<String>,
    /// Connect attempts still waiting on the wallet. Overlapping clicks are allowed.
    pub pending_connections: u32,
}

impl DashboardState {
    pub fn apply_blockhash<E: Display>(&mut self, result: Result<String, E>) {
        self.blockhash = Loadable::from_result(result);
    }

    pub fn apply_epoch_info<E: Display>(&mut self, result: Result<EpochInfo, E>) {
        self.epoch_info = Loadable::from_result(result);
    }

    pub fn begin_connection(&mut self) {
        self.pending_connections += 1;
    }

    pub fn finish_connection(&mut self) {
        self.pending_connections = self.pending_connections.saturating_sub(1);
    }

    pub fn is_connecting(&self) -> bool {
        self.pending_connections > 0
    }

    /// Records a newly connected wallet. The last connection to resolve wins.
    ///
    /// The balance is left as is until a read for `address` replaces it.
    pub fn apply_wallet_connected(&mut self, address: WalletAddress) {
        self.wallet = Some(address);
    }

    /// Stores a balance for `owner`. Returns `false`, leaving state untouched,
    /// if `owner` is no longer the connected wallet.
    pub fn apply_balance<E: Display>(
        &mut self,
        owner: &WalletAddress,
        result: Result<SolAmount, E>,
    ) -> bool {
        if self.wallet.as_ref() != Some(owner) {
            return false;
        }
        self.balance = Loadable::from_result(result);
        true
    }

    pub fn show_wallet_notice(&mut self, notice: impl Into<String>) {
        self.wallet_notice = Some(notice.into());
    }

    pub fn dismiss_wallet_notice(&mut self) {
        self.wallet_notice = None;
    }

    pub fn wallet_address_text(&self) -> String {
        match &self.wallet {
            Some(address) => address.to_string(),
            None => NOT_CONNECTED.to_string(),
        }
    }

    pub fn balance_text(&self) -> String {
        self.balance.render(|amount| format!("{} SOL", amount))
    }

    pub fn blockhash_text(&self) -> String {
        self.blockhash
            .render(|hash| hash.chars().take(BLOCKHASH_PREVIEW_CHARS).collect())
    }

    pub fn epoch_fields(&self) -> [EpochField; 6] {
        let field = |label: &'static str, get: fn(&EpochInfo) -> Option<u64>| EpochField {
            label,
            value: self.epoch_info.render(|info| match get(info) {
                Some(v) => v.to_string(),
                None => NOT_AVAILABLE.to_string(),
            }),
        };

        [
            field("Epoch", |i| Some(i.epoch)),
            field("Slot Index", |i| Some(i.slot_index)),
            field("Slots in Epoch", |i| Some(i.slots_in_epoch)),
            field("Absolute Slot", |i| Some(i.absolute_slot)),
            field("Block Height", |i| Some(i.block_height)),
            field("Transaction Count", |i| i.transaction_count),
        ]
    }
}
