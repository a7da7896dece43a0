use serde::{Deserialize, Serialize};

/// Derived spending-versus-budget view for the dashboard.
///
/// `usage_percent` is clamped to 100 for display; `is_over_budget`
/// compares the raw totals, so it can be `true` while the meter shows
/// exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of the magnitudes of all expense amounts.
    pub total_spent: f64,

    /// Share of the budget consumed, clamped to `0..=100`.
    pub usage_percent: f64,

    /// Whether actual spending exceeds the ceiling.
    pub is_over_budget: bool,
}
