//! Presentation side: KPI cards, progress bar and chart specs for one month.

mod dashboard_model;
mod dashboard_presenter;
mod dashboard_service;
mod dashboard_traits;
pub mod formatting;
pub mod palette;

pub use dashboard_model::*;
pub use dashboard_presenter::{present, DashboardPresenter, DASHBOARD_TITLE};
pub use dashboard_service::{DashboardService, DashboardSettings};
pub use dashboard_traits::DashboardServiceTrait;
