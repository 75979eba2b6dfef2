use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;

/// One row of the cash book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// `None` when the order date cell could not be parsed
    pub order_date: Option<NaiveDate>,
    pub total_value: Decimal,
    pub commission: Decimal,
    pub quantity: Decimal,
    pub client: Option<String>,
}

impl Transaction {
    pub fn new(
        order_date: Option<NaiveDate>,
        total_value: Decimal,
        commission: Decimal,
        quantity: Decimal,
        client: Option<String>,
    ) -> Self {
        Self {
            order_date,
            total_value,
            commission,
            quantity,
            client,
        }
    }

    pub fn month_key(&self) -> Option<MonthKey> {
        self.order_date.map(MonthKey::of)
    }

    /// Day/month label used on the chart axes, e.g. `07/03`
    pub fn display_date(&self) -> Option<String> {
        self.order_date.map(|d| d.format("%d/%m").to_string())
    }
}

/// The loaded transaction table. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Cashbook {
    transactions: Vec<Transaction>,
    has_client_column: bool,
    months: BTreeSet<MonthKey>,
}

impl Cashbook {
    pub fn new(transactions: Vec<Transaction>, has_client_column: bool) -> Self {
        let months = transactions
            .iter()
            .filter_map(Transaction::month_key)
            .collect();
        Self {
            transactions,
            has_client_column,
            months,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn has_client_column(&self) -> bool {
        self.has_client_column
    }

    /// Months with at least one dated row, ascending
    pub fn available_months(&self) -> &BTreeSet<MonthKey> {
        &self.months
    }

    pub fn latest_month(&self) -> Option<MonthKey> {
        self.months.last().copied()
    }

    pub fn undated_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.order_date.is_none())
            .count()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn in_month(&self, month: MonthKey) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |t| t.month_key() == Some(month))
    }
}
