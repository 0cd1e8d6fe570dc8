//! Dashboard module - aggregation engine and view-model assembly.
//!
//! Everything here is a referentially-transparent transform over its
//! arguments: the same record set and period always produce the same
//! summary, and no function consults a clock. The reference instant is
//! consumed by the period resolver alone.

mod aggregation_service;
mod calendar_service;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


#[cfg(test)]
mod calendar_service_tests;


pub use aggregation_service::summarize;
pub use calendar_service::build_month;
pub use dashboard_model::{
    CalendarDay, CategoryTotal, DashboardSummary, PeriodSummary, Slice, TrendPoint,
};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
