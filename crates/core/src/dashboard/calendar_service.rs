//! Month calendar grid construction.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::dashboard_model::CalendarDay;
use crate::constants::CALENDAR_GRID_DAYS;
use crate::records::FinancialRecord;
use crate::utils::time_utils::{first_of_month, local_date_from_utc};

/// Builds the six-week display grid for the month containing `month_ref`.
///
/// The grid starts on `week_start` and always spans 42 cells, so leading and
/// trailing days of adjacent months are included and flagged with
/// `is_current_month = false`. Each cell sums the records of exactly its
/// local date; records outside the grid are ignored, which lets the caller
/// pass whatever it has loaded. This is a separate entry point from
/// [`super::summarize`] because the grid spans more days than the active
/// filter range.
pub fn build_month<I>(
    records: I,
    month_ref: NaiveDate,
    week_start: Weekday,
    tz: Tz,
) -> Vec<CalendarDay>
where
    I: IntoIterator<Item = FinancialRecord>,
{
    let first_day = first_of_month(month_ref);
    let offset = (first_day.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let grid_start = first_day - Duration::days(i64::from(offset));

    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in records {
        let day = local_date_from_utc(record.occurred_at, tz);
        *by_day.entry(day).or_insert(Decimal::ZERO) += record.signed_amount();
    }

    (0..CALENDAR_GRID_DAYS as i64)
        .map(|index| {
            let date = grid_start + Duration::days(index);
            CalendarDay {
                date,
                total: by_day.get(&date).copied().unwrap_or(Decimal::ZERO),
                has_activity: by_day.contains_key(&date),
                is_current_month: date.month() == first_day.month()
                    && date.year() == first_day.year(),
            }
        })
        .collect()
}
