//! Single-pass aggregation of filtered records into period summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::dashboard_model::{CategoryTotal, PeriodSummary, Slice, TrendPoint};
use crate::constants::{EXPENSE_SLICE_COLOR, INCOME_SLICE_COLOR};
use crate::periods::ResolvedRange;
use crate::records::{FinancialRecord, RecordKind};
use crate::utils::time_utils::{days_between, local_date_from_utc};

/// Computes totals, kind slices, the category breakdown and the daily trend
/// for the records of one resolved period.
///
/// The caller is expected to have filtered `records` down to the range
/// already. All sums are exact decimal arithmetic, and the trend carries one
/// point per local calendar day of the range even when the day has no
/// activity.
pub fn summarize<I>(records: I, range: &ResolvedRange, tz: Tz) -> PeriodSummary
where
    I: IntoIterator<Item = FinancialRecord>,
{
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut by_category: BTreeMap<String, (Decimal, u32)> = BTreeMap::new();

    for record in records {
        match record.kind {
            RecordKind::Income => total_income += record.amount,
            RecordKind::Expense => total_expense += record.amount,
        }

        let day = local_date_from_utc(record.occurred_at, tz);
        *by_day.entry(day).or_insert_with(Decimal::zero) += record.signed_amount();

        let entry = by_category
            .entry(record.category_label().to_string())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += record.signed_amount();
        entry.1 += 1;
    }

    let trend = days_between(range.start_date, range.end_date)
        .into_iter()
        .map(|date| TrendPoint {
            date,
            balance: by_day.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect();

    let mut by_category: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total,
            count,
        })
        .collect();
    // Largest absolute share first; the map iteration already fixed label
    // order for ties.
    by_category.sort_by(|a, b| b.total.abs().cmp(&a.total.abs()));

    PeriodSummary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        slices: kind_slices(total_income, total_expense),
        by_category,
        trend,
    }
}

/// Both kind slices in fixed order, income first. Present even at zero so
/// chart legends never deal with a missing series.
fn kind_slices(total_income: Decimal, total_expense: Decimal) -> Vec<Slice> {
    vec![
        Slice {
            label: RecordKind::Income.label().to_string(),
            value: total_income,
            color: INCOME_SLICE_COLOR.to_string(),
        },
        Slice {
            label: RecordKind::Expense.label().to_string(),
            value: total_expense,
            color: EXPENSE_SLICE_COLOR.to_string(),
        },
    ]
}
