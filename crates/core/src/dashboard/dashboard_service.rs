//! Dashboard assembler implementation.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use log::debug;
use rust_decimal::Decimal;

use super::aggregation_service::summarize;
use super::calendar_service;
use super::dashboard_model::{CalendarDay, DashboardSummary};
use super::dashboard_traits::DashboardServiceTrait;
use crate::currency::{format_currency, CurrencyLocale};
use crate::errors::Result;
use crate::periods::{resolve, PeriodSpec};
use crate::records::{filter_records, FilterOptions, FinancialRecord};
use crate::utils::time_utils::DEFAULT_LOCAL_TZ;

/// Stateless assembler for dashboard view models.
///
/// Carries only display configuration (timezone, week start, locale); every
/// record set and reference instant arrives as an argument, so concurrent
/// callers never share mutable state.
pub struct DashboardService {
    tz: Tz,
    week_start: Weekday,
    locale: CurrencyLocale,
}

impl DashboardService {
    pub fn new(tz: Tz, week_start: Weekday, locale: CurrencyLocale) -> Self {
        Self {
            tz,
            week_start,
            locale,
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_TZ, Weekday::Sun, CurrencyLocale::pt_br())
    }
}

impl DashboardServiceTrait for DashboardService {
    fn build_summary(
        &self,
        records: &[FinancialRecord],
        spec: &PeriodSpec,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary> {
        debug!("Building dashboard summary for {:?}", spec);

        let range = resolve(spec, now, self.tz)?;

        // The dashboard shows every record of the period; callers wanting a
        // narrower view pre-filter with `filter_records` and their own
        // options before aggregating.
        let filtered = filter_records(records.iter().cloned(), range, FilterOptions::default());
        let period = summarize(filtered, &range, self.tz);

        // The calendar spans the whole month around the most recent day in
        // view, filler days included, so it reads from the full record set.
        let calendar_days = calendar_service::build_month(
            records.iter().cloned(),
            range.end_date,
            self.week_start,
            self.tz,
        );

        Ok(DashboardSummary {
            total_income: period.total_income,
            total_expense: period.total_expense,
            balance: period.balance,
            slices: period.slices,
            by_category: period.by_category,
            trend: period.trend,
            calendar_days,
        })
    }

    fn build_month(&self, records: &[FinancialRecord], month_ref: NaiveDate) -> Vec<CalendarDay> {
        calendar_service::build_month(records.iter().cloned(), month_ref, self.week_start, self.tz)
    }

    fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.locale)
    }
}
