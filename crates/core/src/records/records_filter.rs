//! Period and attribute filtering over record streams.

use super::records_model::{FinancialRecord, RecordKind, RecordStatus};
use crate::periods::ResolvedRange;

/// Optional constraints applied on top of the period range.
///
/// `category` and `search` both match case-insensitively as substrings;
/// `search` looks at the description and the category label. `Default`
/// applies no constraint beyond the range.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub kind: Option<RecordKind>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub status: Option<RecordStatus>,
    /// When `false`, pending records are dropped. Defaults to `true`:
    /// pending records count everywhere unless a caller opts out.
    pub include_pending: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            kind: None,
            category: None,
            search: None,
            status: None,
            include_pending: true,
        }
    }
}

impl FilterOptions {
    /// True when `record` satisfies every configured constraint.
    pub fn matches(&self, record: &FinancialRecord) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if !self.include_pending && record.status == RecordStatus::Pending {
            return false;
        }
        if let Some(category) = &self.category {
            if !contains_ignore_case(record.category_label(), category) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !contains_ignore_case(&record.description, search)
                && !contains_ignore_case(record.category_label(), search)
            {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Selects the records whose timestamp falls inside `range` (half-open:
/// `start <= occurred_at < end`) and which satisfy `opts`.
///
/// Lazy and single-pass: the source is consumed one element at a time and
/// never materialized, so it can wrap a streaming store cursor. The result
/// is finite and non-restartable unless the source is restartable.
pub fn filter_records<I>(
    records: I,
    range: ResolvedRange,
    opts: FilterOptions,
) -> impl Iterator<Item = FinancialRecord>
where
    I: IntoIterator<Item = FinancialRecord>,
{
    records
        .into_iter()
        .filter(move |record| range.contains(record.occurred_at) && opts.matches(record))
}
