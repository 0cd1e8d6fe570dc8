use chrono::{DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for calendar-day semantics.
/// This is the canonical timezone used to convert UTC instants to local
/// dates. For a Brazil-focused finance tracker, America/Sao_Paulo is a
/// sensible default.
pub const DEFAULT_LOCAL_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// Converts a UTC instant to a calendar date in the given timezone.
///
/// This is the single source of truth for deriving a "day" from a
/// timestamp. Use this whenever records are bucketed by day.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Returns the UTC instant at which the given local calendar day begins.
///
/// Midnights skipped by a DST transition resolve to the first valid instant
/// of the day; ambiguous midnights resolve to the earlier of the two.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut candidate = date.and_time(NaiveTime::MIN);
    for _ in 0..24 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => candidate += Duration::hours(1),
        }
    }
    // No timezone skips an entire day; treat the naive reading as UTC if
    // the tz database ever produces one.
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Every calendar day from `start` through `end` inclusive, ascending.
/// Empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |day| day.succ_opt())
        .take_while(|day| *day <= end)
        .collect()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// First day of the month after the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn local_midnight_offsets_by_timezone() {
        // Sao Paulo has been fixed at UTC-3 since DST was abolished in 2019.
        let midnight = local_midnight(date(2025, 4, 1), DEFAULT_LOCAL_TZ);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap());
    }

    #[test]
    fn local_midnight_skipped_by_dst_resolves_forward() {
        // Brazil's 2018 spring-forward jumped straight from 23:59 to 01:00,
        // so midnight of 2018-11-04 never existed in Sao Paulo.
        let midnight = local_midnight(date(2018, 11, 4), DEFAULT_LOCAL_TZ);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2018, 11, 4, 3, 0, 0).unwrap());
    }

    #[test]
    fn local_date_follows_timezone_not_utc() {
        // 02:00 UTC on April 1st is still March 31st in Sao Paulo.
        let instant = Utc.with_ymd_and_hms(2025, 4, 1, 2, 0, 0).unwrap();
        assert_eq!(local_date_from_utc(instant, DEFAULT_LOCAL_TZ), date(2025, 3, 31));
    }

    #[test]
    fn days_between_is_inclusive_and_ordered() {
        let days = days_between(date(2025, 4, 28), date(2025, 5, 2));
        assert_eq!(
            days,
            vec![
                date(2025, 4, 28),
                date(2025, 4, 29),
                date(2025, 4, 30),
                date(2025, 5, 1),
                date(2025, 5, 2),
            ]
        );
        assert!(days_between(date(2025, 5, 2), date(2025, 4, 28)).is_empty());
        assert_eq!(days_between(date(2025, 4, 1), date(2025, 4, 1)).len(), 1);
    }

    #[test]
    fn month_boundaries_handle_year_wrap_and_leap_years() {
        assert_eq!(first_of_month(date(2025, 12, 31)), date(2025, 12, 1));
        assert_eq!(first_of_next_month(date(2025, 12, 31)), date(2026, 1, 1));
        assert_eq!(first_of_next_month(date(2024, 2, 29)), date(2024, 3, 1));
    }
}
