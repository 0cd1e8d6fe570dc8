//! Dashboard view models.
//!
//! Plain values derived from a record set and a resolved period. They carry
//! no identity and are recomputed wholesale whenever either input changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One kind's share of the period total, for donut/pie rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

/// One category's share of the period activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    /// Net signed total for the category (income positive, expense negative).
    pub total: Decimal,
    pub count: u32,
}

/// One day's net balance within a period, for line-chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// One cell of a month calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Net signed total of the day's records.
    pub total: Decimal,
    pub has_activity: bool,
    pub is_current_month: bool,
}

/// Aggregates for one resolved period: totals, kind slices, category
/// breakdown and the daily trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`, exact.
    pub balance: Decimal,
    pub slices: Vec<Slice>,
    pub by_category: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
}

/// The composed dashboard view model handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub slices: Vec<Slice>,
    pub by_category: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
    pub calendar_days: Vec<CalendarDay>,
}
