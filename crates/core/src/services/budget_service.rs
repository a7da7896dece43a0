use crate::models::budget::BudgetSummary;
use crate::models::transaction::Transaction;

/// Derives the dashboard's spending-versus-budget view from the
/// fetched transaction list and the session-local ceiling.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize spending against a monthly ceiling.
    ///
    /// Income rows are ignored; only negative amounts count toward
    /// `total_spent`. The percentage is clamped to 100 and defined as
    /// 0 for a non-positive ceiling, while `is_over_budget` compares
    /// the raw totals.
    #[must_use]
    pub fn summarize(&self, transactions: &[Transaction], monthly_budget: f64) -> BudgetSummary {
        let total_spent: f64 = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(Transaction::abs_amount)
            .sum();

        let usage_percent = if monthly_budget > 0.0 {
            (total_spent / monthly_budget * 100.0).min(100.0)
        } else {
            0.0
        };

        BudgetSummary {
            total_spent,
            usage_percent,
            is_over_budget: total_spent > monthly_budget,
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
