use api::config::DashboardConfig;
use std::ops::Deref;
use std::sync::Arc;

/// Settings fixed for the lifetime of the app.
#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: DashboardConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
