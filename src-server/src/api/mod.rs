mod dashboard;
mod page;

use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub use dashboard::MonthsResponse;

pub fn app_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(page::router())
        .nest("/api/v1", dashboard::router())
}
