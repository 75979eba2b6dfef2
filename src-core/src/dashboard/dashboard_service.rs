use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dashboard_presenter::DashboardPresenter;
use super::dashboard_traits::DashboardServiceTrait;
use super::DashboardView;
use crate::aggregation::aggregate_selection;
use crate::cashbook::{Cashbook, MonthKey};
use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_MONTHLY_GOAL};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::pace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub monthly_goal: Decimal,
    pub currency_symbol: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<()> {
        if self.monthly_goal < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Monthly goal must not be negative, got {}",
                self.monthly_goal
            ))));
        }
        Ok(())
    }
}

/// Runs select -> aggregate -> pace -> present over the loaded cash book
pub struct DashboardService {
    cashbook: Arc<Cashbook>,
    settings: DashboardSettings,
    presenter: DashboardPresenter,
}

impl DashboardService {
    pub fn new(cashbook: Arc<Cashbook>, settings: DashboardSettings) -> Self {
        let presenter = DashboardPresenter::new(settings.currency_symbol.clone());
        DashboardService {
            cashbook,
            settings,
            presenter,
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn cashbook(&self) -> &Cashbook {
        &self.cashbook
    }
}

impl DashboardServiceTrait for DashboardService {
    fn available_months(&self) -> Vec<MonthKey> {
        self.cashbook.available_months().iter().copied().collect()
    }

    fn default_month(&self) -> Option<MonthKey> {
        self.cashbook.latest_month()
    }

    /// Parameters:
    ///   selection: Raw `YYYY-MM` from the page; missing or malformed keys
    ///              render the all-zero view paced against today's month
    ///   today: Reference date for pacing
    fn build_dashboard(&self, selection: Option<&str>, today: NaiveDate) -> DashboardView {
        let monthly = aggregate_selection(&self.cashbook, selection);
        let selected = monthly.month;
        let pacing_month = selected.unwrap_or_else(|| MonthKey::of(today));
        let pacing = pace(&monthly, pacing_month, self.settings.monthly_goal, today);

        debug!(
            "Dashboard for {}: {} orders, revenue {}, {} business days left",
            pacing_month, monthly.order_count, monthly.revenue, pacing.business_days_remaining
        );

        let mut view = self.presenter.present(&monthly, &pacing);
        view.selected_month = selected.map(|m| m.to_string());
        view.available_months = self
            .cashbook
            .available_months()
            .iter()
            .map(ToString::to_string)
            .collect();
        view
    }
}
