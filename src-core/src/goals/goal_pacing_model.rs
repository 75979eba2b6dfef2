use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashbook::MonthKey;

/// How far a month is from its revenue goal, as of a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPacing {
    pub month: MonthKey,
    pub goal: Decimal,
    /// Revenue already received in the month
    pub paid: Decimal,
    /// goal - paid, never below zero
    pub remaining: Decimal,
    pub days_remaining: i64,
    /// Mon-Fri days left, holidays not considered
    pub business_days_remaining: u32,
    /// Revenue needed per remaining business day
    pub daily_pace: Decimal,
    /// Unclamped; may exceed 100
    pub percent_achieved: Decimal,
}

impl GoalPacing {
    /// Progress-bar width, kept within 0..=100
    pub fn progress_width(&self) -> Decimal {
        self.percent_achieved
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    pub fn goal_reached(&self) -> bool {
        self.remaining.is_zero()
    }
}
