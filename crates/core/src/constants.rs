/// Decimal precision for displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Fallback label for records with a blank category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Color hint for the income slice
pub const INCOME_SLICE_COLOR: &str = "#1ABCFE";

/// Color hint for the expense slice
pub const EXPENSE_SLICE_COLOR: &str = "#1DA1F2";

/// Number of cells in a month calendar grid (six full weeks)
pub const CALENDAR_GRID_DAYS: usize = 42;
