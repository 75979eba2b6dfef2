use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use livrocaixa_core::cashbook::MonthKey;
use livrocaixa_core::errors::{Error, ValidationError};
use livrocaixa_core::{DashboardServiceTrait, DashboardView};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthsResponse {
    pub months: Vec<MonthKey>,
    pub default: Option<MonthKey>,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    month: Option<String>,
    /// YYYY-MM-DD, defaults to the local date
    today: Option<String>,
}

async fn get_months(State(state): State<Arc<AppState>>) -> Json<MonthsResponse> {
    Json(MonthsResponse {
        months: state.dashboard_service.available_months(),
        default: state.dashboard_service.default_month(),
    })
}

/// Dashboard view for one month
/// Query params:
///   month: YYYY-MM (optional, defaults to the latest month in the cash book)
///   today: YYYY-MM-DD (optional, defaults to today)
async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardView>> {
    let today = match query.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                raw
            )))
        })?,
        None => chrono::Local::now().date_naive(),
    };

    let month = query
        .month
        .or_else(|| state.dashboard_service.default_month().map(|m| m.to_string()));

    let view = state.dashboard_service.build_dashboard(month.as_deref(), today);
    Ok(Json(view))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/months", get(get_months))
        .route("/dashboard", get(get_dashboard))
        .route("/healthz", get(healthz))
}
