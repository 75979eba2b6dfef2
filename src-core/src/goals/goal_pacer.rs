use chrono::{Datelike, NaiveDate, Weekday};
use log::warn;
use rust_decimal::Decimal;

use crate::aggregation::MonthlyAggregate;
use crate::cashbook::MonthKey;
use crate::goals::goal_pacing_model::GoalPacing;

/// Calculate goal pacing for `month` as seen on `today`
/// Parameters:
///   aggregate: Totals of the month, only `revenue` is used
///   month: The month being paced
///   goal: Monthly revenue target
///   today: Reference date; the current month is paced from this day on
pub fn pace(
    aggregate: &MonthlyAggregate,
    month: MonthKey,
    goal: Decimal,
    today: NaiveDate,
) -> GoalPacing {
    let paid = aggregate.revenue;
    let remaining = goal
        .checked_sub(paid)
        .unwrap_or(Decimal::MAX)
        .max(Decimal::ZERO);

    let first_day = month.first_day();
    let last_day = month.last_day();
    let is_current = month.contains(today);

    let effective_start = if is_current {
        today.max(first_day)
    } else {
        first_day
    };
    let business_days_remaining = business_days_between(effective_start, last_day);

    let daily_pace = if business_days_remaining > 0 && remaining > Decimal::ZERO {
        remaining / Decimal::from(business_days_remaining)
    } else {
        Decimal::ZERO
    };

    let percent_achieved = if goal.is_zero() {
        Decimal::ZERO
    } else {
        percent_of(paid, goal)
    };

    GoalPacing {
        month,
        goal,
        paid,
        remaining,
        days_remaining: days_remaining(month, today),
        business_days_remaining,
        daily_pace,
        percent_achieved,
    }
}

/// `part / whole * 100`, saturating when the ratio is out of `Decimal` range
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            warn!("Percentage of {} over goal {} overflows, saturating", part, whole);
            if part.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
}

/// Calendar days left in `month`.
///
/// For the month containing `today` this is `last_day - today`; for any
/// other month it is the span from its first to its last day.
pub fn days_remaining(month: MonthKey, today: NaiveDate) -> i64 {
    let last_day = month.last_day();
    if month.contains(today) {
        (last_day - today).num_days().max(0)
    } else {
        (last_day - month.first_day()).num_days()
    }
}

/// Count Mon-Fri days in the inclusive range `[start, end]`
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}
