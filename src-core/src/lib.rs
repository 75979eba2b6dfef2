//! Core of the livro caixa dashboard: loads the cash-book table once,
//! aggregates a selected month, paces it against the monthly goal and turns
//! the figures into a renderable view.

pub mod aggregation;
pub mod cashbook;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;

pub use aggregation::{aggregate, aggregate_selection, ClientTotal, DailyPoint, MonthlyAggregate};
pub use cashbook::{Cashbook, ColumnMapping, LoadError, MonthKey, Transaction};
pub use dashboard::{DashboardService, DashboardServiceTrait, DashboardSettings, DashboardView};
pub use goals::{business_days_between, pace, GoalPacing};
