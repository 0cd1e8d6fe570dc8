//! Financial record domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNCATEGORIZED_LABEL;

/// Direction of a financial record.
///
/// Amounts are always non-negative; direction is carried here, never by the
/// sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Display label used for chart slices.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }
}

/// Settlement status of a record.
///
/// Orthogonal to the kind. Totals include every status; dropping pending
/// records only happens when a filter explicitly asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    #[default]
    Settled,
    Pending,
}

/// Domain model representing one income or expense event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    /// Store-assigned identifier; `0` for records not yet persisted.
    #[serde(default)]
    pub id: i64,
    pub kind: RecordKind,
    /// Non-negative amount in the account currency.
    pub amount: Decimal,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl FinancialRecord {
    /// Category label with the blank-category fallback applied.
    pub fn category_label(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            UNCATEGORIZED_LABEL
        } else {
            trimmed
        }
    }

    /// Amount signed by direction: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}
