use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use livrocaixa_core::cashbook::load_with_mapping;
use livrocaixa_core::{DashboardService, DashboardServiceTrait};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{api::app_router, config::Config};

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

/// Load the cash book once and wire the services around it
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let cashbook = load_with_mapping(&config.file, &config.sheet, &config.columns)
        .with_context(|| format!("Failed to load {}", config.file.display()))?;

    tracing::info!(
        rows = cashbook.len(),
        months = cashbook.available_months().len(),
        sheet = %config.sheet,
        "cash book loaded"
    );

    let dashboard_service = DashboardService::new(Arc::new(cashbook), config.dashboard.clone());
    Ok(Arc::new(AppState {
        dashboard_service: Arc::new(dashboard_service),
    }))
}

pub fn app(state: Arc<AppState>) -> Router {
    app_router()
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
