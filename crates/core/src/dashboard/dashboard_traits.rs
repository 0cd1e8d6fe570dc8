//! Trait defining the contract for the dashboard service.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::dashboard_model::{CalendarDay, DashboardSummary};
use crate::errors::Result;
use crate::periods::PeriodSpec;
use crate::records::FinancialRecord;

/// Contract for assembling dashboard view models from a record set.
pub trait DashboardServiceTrait: Send + Sync {
    /// Composes period resolution, filtering and aggregation into the full
    /// dashboard view model for `spec` as of `now`.
    fn build_summary(
        &self,
        records: &[FinancialRecord],
        spec: &PeriodSpec,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary>;

    /// Builds the calendar grid for the month containing `month_ref`.
    fn build_month(&self, records: &[FinancialRecord], month_ref: NaiveDate) -> Vec<CalendarDay>;

    /// Renders an amount in the service's configured locale.
    fn format_amount(&self, amount: Decimal) -> String;
}
