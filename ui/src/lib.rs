// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod actions;
mod app_state;
pub mod compat;
mod components;
pub mod dashboard_state;
pub mod hooks;
pub mod ledger;
mod screens;
pub mod wallet;

use app_state::AppState;
use components::pico::Container;
use hooks::use_rpc_checker::RpcConnectionStatus;
use screens::dashboard::DashboardScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: linear-gradient(to right, #3b82f6, #22c55e);
    }

    .app-main-container > main {
        max-width: 42rem;
        width: 100%;
        margin: 0;
    }

    .dashboard-title {
        text-align: center;
        margin-bottom: 1.5rem;
    }

    .dashboard-summary {
        text-align: center;
        margin: 1.5rem 0;
    }

    .dashboard-summary p { margin-bottom: 0.25rem; word-break: break-all; }

    .app-main-container main > article > button { width: 100%; border-radius: 9999px; }

    /* --- METRIC GRID --- */
    .metric-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 1.5rem;
    }

    .metric-card {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin: 0;
        padding: 1rem;
    }

    .metric-icon { font-size: 1.5rem; }
    .metric-label, .metric-value { margin: 0; }
    .metric-value { color: var(--pico-muted-color); }
    .metric-error { color: var(--pico-del-color); }

    .rpc-banner {
        border-left: 4px solid var(--pico-del-color);
        margin-bottom: 1rem;
    }

    /* --- Mobile Styles --- */
    @media (max-width: 576px) {
        .metric-grid { grid-template-columns: minmax(0, 1fr); }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{dashboard_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let config_future = use_server_future(move || async move { api::dashboard_config().await })?;

    let body = match &*config_future.read() {
        Some(Ok(config)) => {
            dioxus_logger::tracing::info!("config: {:#?}", config);
            rsx! {
                LoadedApp {
                    app_state: AppState::new(config.clone()),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Shared RPC reachability, updated by every ledger read.
    let rpc_status = use_signal(|| RpcConnectionStatus::Connected);
    use_context_provider(|| rpc_status);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                DashboardScreen {}
            }
        }
    }
}
