use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;

use super::{ClientTotal, DailyPoint, MonthlyAggregate};
use crate::cashbook::{Cashbook, MonthKey, Transaction};
use crate::constants::RANKING_LIMIT;

/// Aggregate every row of `cashbook` dated within `month`.
///
/// Rows without a parseable date never match a month. A month with no rows
/// yields [`MonthlyAggregate::empty`].
pub fn aggregate(cashbook: &Cashbook, month: MonthKey) -> MonthlyAggregate {
    let rows: Vec<&Transaction> = cashbook.in_month(month).collect();
    if rows.is_empty() {
        return MonthlyAggregate::empty(Some(month));
    }

    let mut revenue = Decimal::ZERO;
    let mut commission = Decimal::ZERO;
    let mut quantity = Decimal::ZERO;
    // date -> (axis label, revenue, commission)
    let mut daily: BTreeMap<NaiveDate, (String, Decimal, Decimal)> = BTreeMap::new();

    // Sums saturate at the Decimal bounds rather than overflow
    for row in &rows {
        revenue = revenue.saturating_add(row.total_value);
        commission = commission.saturating_add(row.commission);
        quantity = quantity.saturating_add(row.quantity);
        if let (Some(date), Some(label)) = (row.order_date, row.display_date()) {
            let day = daily
                .entry(date)
                .or_insert_with(|| (label, Decimal::ZERO, Decimal::ZERO));
            day.1 = day.1.saturating_add(row.total_value);
            day.2 = day.2.saturating_add(row.commission);
        }
    }

    let ranking = if cashbook.has_client_column() {
        rank_clients(&rows)
    } else {
        Vec::new()
    };

    let point = |date: &NaiveDate, label: &str, value: Decimal| DailyPoint {
        date: *date,
        label: label.to_string(),
        value,
    };

    MonthlyAggregate {
        month: Some(month),
        revenue,
        commission,
        quantity,
        order_count: rows.len(),
        ranking: if ranking.is_empty() {
            vec![ClientTotal::placeholder()]
        } else {
            ranking
        },
        daily_revenue: daily.iter().map(|(d, (l, v, _))| point(d, l, *v)).collect(),
        daily_commission: daily.iter().map(|(d, (l, _, c))| point(d, l, *c)).collect(),
    }
}

/// Aggregate a raw selection coming from the page.
/// A missing or malformed key takes the all-zero path.
pub fn aggregate_selection(cashbook: &Cashbook, selection: Option<&str>) -> MonthlyAggregate {
    match selection.map(str::parse::<MonthKey>) {
        Some(Ok(month)) => aggregate(cashbook, month),
        Some(Err(e)) => {
            warn!("Ignoring month selection: {}", e);
            MonthlyAggregate::empty(None)
        }
        None => MonthlyAggregate::empty(None),
    }
}

/// Sum revenue per client, highest first, ties by client name
fn rank_clients(rows: &[&Transaction]) -> Vec<ClientTotal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for row in rows {
        if let Some(client) = row.client.as_deref() {
            let total = totals.entry(client).or_insert(Decimal::ZERO);
            *total = total.saturating_add(row.total_value);
        }
    }

    let mut ranking: Vec<ClientTotal> = totals
        .into_iter()
        .map(|(client, total)| ClientTotal {
            client: client.to_string(),
            total,
        })
        .collect();
    ranking.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.client.cmp(&b.client)));
    ranking.truncate(RANKING_LIMIT);
    ranking
}
