use dioxus::prelude::*;

use crate::actions;
use crate::compat;
use crate::components::metric_card::MetricCard;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Modal;
use crate::dashboard_state::DashboardState;
use crate::hooks::use_rpc_checker::use_rpc_checker;
use crate::hooks::use_rpc_checker::RpcConnectionStatus;
use crate::ledger::ServerLedger;
use crate::AppState;

/// Icon and accent color for each epoch counter, in `epoch_fields` order.
const EPOCH_ICONS: [(&str, &str); 6] = [
    ("📅", "#22c55e"),
    ("🧱", "#ef4444"),
    ("🧊", "#a855f7"),
    ("📊", "#eab308"),
    ("⚖️", "#6366f1"),
    ("👛", "#ec4899"),
];

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let rpc_checker = use_rpc_checker();
    let ledger = ServerLedger::new(rpc_checker);
    let wallet = use_hook(|| compat::platform_wallet(&app_state.config));

    let state = use_signal(DashboardState::default);

    // Runs once per mount. No polling.
    use_future(move || async move {
        actions::initialize_network_info(&ledger, &state).await;
    });

    let connect = move |_: MouseEvent| {
        let wallet = wallet.clone();
        spawn(async move {
            actions::connect_wallet(&wallet, &ledger, &state).await;
        });
    };

    let retry_blockhash = move |_: MouseEvent| {
        spawn(async move {
            actions::load_blockhash(&ledger, &state).await;
        });
    };

    let retry_epoch_info = move |_: MouseEvent| {
        spawn(async move {
            actions::load_epoch_info(&ledger, &state).await;
        });
    };

    let retry_balance = move |_: MouseEvent| {
        let wallet_address = state.peek().wallet.clone();
        if let Some(address) = wallet_address {
            spawn(async move {
                actions::fetch_balance(&ledger, &state, &address).await;
            });
        }
    };

    let snapshot = state.read().clone();
    let network_label = app_state.config.network_label().to_string();
    let notice = snapshot.wallet_notice.clone();
    let notice_text = notice.clone().unwrap_or_default();

    rsx! {
        if let RpcConnectionStatus::Disconnected(reason) = &*rpc_checker.status().read() {
            article {
                class: "rpc-banner",
                strong { "Cannot reach the Solana RPC endpoint. " }
                small { "{reason}" }
            }
        }
        Card {
            h1 {
                class: "dashboard-title",
                "Solana Dashboard"
            }
            Button {
                on_click: connect,
                busy: snapshot.is_connecting(),
                "Connect Wallet"
            }
            div {
                class: "dashboard-summary",
                p {
                    strong { "Wallet Address: " }
                    "{snapshot.wallet_address_text()}"
                }
                p {
                    strong { "Balance: " }
                    span {
                        title: snapshot.balance.error().unwrap_or_default(),
                        "{snapshot.balance_text()}"
                    }
                    if snapshot.balance.is_failed() {
                        " "
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: retry_balance,
                            "Retry"
                        }
                    }
                }
            }
            div {
                class: "metric-grid",
                MetricCard {
                    label: "Blockhash",
                    value: snapshot.blockhash_text(),
                    icon: "#",
                    accent: "#3b82f6",
                    error: snapshot.blockhash.error().map(str::to_string),
                    on_retry: retry_blockhash,
                }
                for (field, (icon, accent)) in snapshot.epoch_fields().into_iter().zip(EPOCH_ICONS) {
                    MetricCard {
                        key: "{field.label}",
                        label: field.label.to_string(),
                        value: field.value,
                        icon: icon.to_string(),
                        accent: accent.to_string(),
                        error: snapshot.epoch_info.error().map(str::to_string),
                        on_retry: retry_epoch_info,
                    }
                }
                MetricCard {
                    label: "Network",
                    value: network_label,
                    icon: "◎",
                    accent: "#14b8a6",
                }
                MetricCard {
                    label: "Swaps",
                    value: "Available",
                    icon: "⇅",
                    accent: "#f97316",
                }
            }
        }
        Modal {
            is_open: notice.is_some(),
            title: "Wallet not found",
            on_close: move |_| {
                let mut state = state;
                state.write().dismiss_wallet_notice();
            },
            p { "{notice_text}" }
        }
    }
}
