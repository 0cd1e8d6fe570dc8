//! Unit tests for the month calendar grid.

use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::CALENDAR_GRID_DAYS;
use crate::dashboard::build_month;
use crate::records::{FinancialRecord, RecordKind, RecordStatus};
use crate::utils::time_utils::DEFAULT_LOCAL_TZ;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(kind: RecordKind, amount: Decimal, d: NaiveDate) -> FinancialRecord {
    FinancialRecord {
        id: 0,
        kind,
        amount,
        // noon in Sao Paulo
        occurred_at: Utc
            .with_ymd_and_hms(d.year(), d.month(), d.day(), 15, 0, 0)
            .unwrap(),
        category: "Mercado".to_string(),
        description: String::new(),
        status: RecordStatus::Settled,
    }
}

#[test]
fn grid_spans_six_full_weeks_from_the_week_start() {
    // April 2025 starts on a Tuesday.
    let grid = build_month(Vec::new(), date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);

    assert_eq!(grid.len(), CALENDAR_GRID_DAYS);
    assert_eq!(grid.len() % 7, 0);
    assert_eq!(grid[0].date, date(2025, 3, 30));
    assert_eq!(grid[0].date.weekday(), Weekday::Sun);
    assert_eq!(grid.last().unwrap().date, date(2025, 5, 10));
}

#[test]
fn week_start_is_configurable() {
    let grid = build_month(Vec::new(), date(2025, 4, 15), Weekday::Mon, DEFAULT_LOCAL_TZ);

    assert_eq!(grid[0].date, date(2025, 3, 31));
    assert_eq!(grid[0].date.weekday(), Weekday::Mon);
}

#[test]
fn every_day_of_the_month_is_present_and_flagged() {
    let grid = build_month(Vec::new(), date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);

    let current: Vec<_> = grid.iter().filter(|day| day.is_current_month).collect();
    assert_eq!(current.len(), 30);
    for (index, day) in current.iter().enumerate() {
        assert_eq!(day.date, date(2025, 4, index as u32 + 1));
    }
    assert!(grid
        .iter()
        .filter(|day| !day.is_current_month)
        .all(|day| day.date.month() != 4));
}

#[test]
fn day_totals_are_net_and_activity_is_exact_date_membership() {
    let records = vec![
        record(RecordKind::Income, dec!(100), date(2025, 4, 1)),
        record(RecordKind::Expense, dec!(40), date(2025, 4, 1)),
        record(RecordKind::Expense, dec!(25), date(2025, 4, 3)),
    ];

    let grid = build_month(records, date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);
    let by_date = |d: NaiveDate| grid.iter().find(|day| day.date == d).unwrap();

    let first = by_date(date(2025, 4, 1));
    assert_eq!(first.total, dec!(60));
    assert!(first.has_activity);

    let second = by_date(date(2025, 4, 2));
    assert_eq!(second.total, Decimal::ZERO);
    assert!(!second.has_activity);

    let third = by_date(date(2025, 4, 3));
    assert_eq!(third.total, dec!(-25));
    assert!(third.has_activity);
}

#[test]
fn zero_net_day_still_counts_as_activity() {
    let records = vec![
        record(RecordKind::Income, dec!(50), date(2025, 4, 8)),
        record(RecordKind::Expense, dec!(50), date(2025, 4, 8)),
    ];

    let grid = build_month(records, date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);
    let day = grid.iter().find(|day| day.date == date(2025, 4, 8)).unwrap();

    assert_eq!(day.total, Decimal::ZERO);
    assert!(day.has_activity);
}

#[test]
fn filler_days_carry_their_own_totals() {
    // March 31st lands in the leading filler row of the April grid.
    let records = vec![record(RecordKind::Expense, dec!(70), date(2025, 3, 31))];

    let grid = build_month(records, date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);
    let filler = grid.iter().find(|day| day.date == date(2025, 3, 31)).unwrap();

    assert!(!filler.is_current_month);
    assert!(filler.has_activity);
    assert_eq!(filler.total, dec!(-70));
}

#[test]
fn records_outside_the_grid_are_ignored() {
    let records = vec![record(RecordKind::Expense, dec!(70), date(2025, 1, 10))];

    let grid = build_month(records, date(2025, 4, 15), Weekday::Sun, DEFAULT_LOCAL_TZ);

    assert!(grid.iter().all(|day| !day.has_activity));
}

#[test]
fn leap_february_grid_flags_twenty_nine_days() {
    let grid = build_month(Vec::new(), date(2024, 2, 10), Weekday::Sun, DEFAULT_LOCAL_TZ);

    assert_eq!(grid[0].date, date(2024, 1, 28));
    assert_eq!(grid.iter().filter(|day| day.is_current_month).count(), 29);
}
