//! Resolution of period specs into concrete instant ranges.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use super::periods_model::{PeriodSpec, ResolvedRange};
use crate::errors::{Error, Result};
use crate::utils::time_utils::{
    first_of_month, first_of_next_month, local_date_from_utc, local_midnight,
};

/// Resolves `spec` against the reference instant `now`, using local calendar
/// semantics in `tz`.
///
/// Every range is anchored to local midnights. "Last N days" is
/// calendar-aligned: it covers the `n` local days ending with today, not a
/// rolling `n * 24h` window ending at `now`.
pub fn resolve(spec: &PeriodSpec, now: DateTime<Utc>, tz: Tz) -> Result<ResolvedRange> {
    let today = local_date_from_utc(now, tz);

    let (start_date, end_date) = match *spec {
        PeriodSpec::Today => (today, today),
        PeriodSpec::LastNDays { days } => {
            if days == 0 {
                return Err(Error::InvalidPeriodSpec(
                    "last-n-days window must cover at least one day".to_string(),
                ));
            }
            (today - Duration::days(i64::from(days) - 1), today)
        }
        PeriodSpec::CurrentMonth => {
            (first_of_month(today), first_of_next_month(today) - Duration::days(1))
        }
        // Re-checked here: Custom values can reach the resolver without
        // going through the checked constructor (e.g. deserialized input).
        PeriodSpec::Custom { start, end } => {
            if start > end {
                return Err(Error::InvalidRange { start, end });
            }
            (start, end)
        }
    };

    Ok(ResolvedRange {
        start: local_midnight(start_date, tz),
        end: local_midnight(end_date + Duration::days(1), tz),
        start_date,
        end_date,
    })
}
