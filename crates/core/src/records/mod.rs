//! Financial records module - domain models and period filtering.

mod records_filter;
mod records_model;


pub use records_filter::{filter_records, FilterOptions};
pub use records_model::{FinancialRecord, RecordKind, RecordStatus};
