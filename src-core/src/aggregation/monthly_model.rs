use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashbook::MonthKey;
use crate::constants::UNKNOWN_CLIENT;

/// Totals of one selected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    /// `None` on the empty-selection path
    pub month: Option<MonthKey>,
    pub revenue: Decimal,
    pub commission: Decimal,
    pub quantity: Decimal,
    pub order_count: usize,
    /// Highest revenue first, at most `RANKING_LIMIT` entries
    pub ranking: Vec<ClientTotal>,
    /// Revenue summed per day, ascending by date
    pub daily_revenue: Vec<DailyPoint>,
    /// Commission summed per day, ascending by date
    pub daily_commission: Vec<DailyPoint>,
}

impl MonthlyAggregate {
    /// All-zero aggregate with the placeholder ranking
    pub fn empty(month: Option<MonthKey>) -> Self {
        Self {
            month,
            revenue: Decimal::ZERO,
            commission: Decimal::ZERO,
            quantity: Decimal::ZERO,
            order_count: 0,
            ranking: vec![ClientTotal::placeholder()],
            daily_revenue: Vec::new(),
            daily_commission: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTotal {
    pub client: String,
    pub total: Decimal,
}

impl ClientTotal {
    pub fn placeholder() -> Self {
        Self {
            client: UNKNOWN_CLIENT.to_string(),
            total: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// `dd/mm`
    pub label: String,
    pub value: Decimal,
}
