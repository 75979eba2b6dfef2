use chrono::NaiveDate;

use super::DashboardView;
use crate::cashbook::MonthKey;

pub trait DashboardServiceTrait: Send + Sync {
    fn available_months(&self) -> Vec<MonthKey>;
    fn default_month(&self) -> Option<MonthKey>;
    fn build_dashboard(&self, selection: Option<&str>, today: NaiveDate) -> DashboardView;
}
