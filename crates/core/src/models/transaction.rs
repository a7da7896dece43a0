use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories the add-expense form suggests. The API stores whatever
/// string it receives; this set is a client-side convenience only.
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["General", "Food", "Data/Airtime", "Transport", "Power"];

/// Category preselected in a fresh expense draft.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single ledger record owned by the API.
///
/// Sign convention: negative `amount` is an expense (outflow), positive
/// is income. The client never edits records in place; it only creates
/// and deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Server-assigned identifier, opaque to the client.
    pub id: String,

    pub description: String,

    /// Signed amount; see the sign convention above.
    pub amount: f64,

    pub category: String,

    /// Set by the server; may be absent on older records.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// True when the amount is negative (money out).
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// True when the amount is positive (money in).
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Magnitude of the amount, for display and spending totals.
    #[must_use]
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// Payload for `POST /transactions/add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl NewTransaction {
    /// Build an expense payload, normalizing the sign first.
    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: normalize_expense_amount(amount),
            category: category.into(),
        }
    }
}

/// Flip a positive user-entered amount to negative before submission.
/// Zero and already-negative amounts pass through unchanged; the
/// add-expense form records outflows, and the sign convention wants
/// outflows negative.
#[must_use]
pub fn normalize_expense_amount(amount: f64) -> f64 {
    if amount > 0.0 {
        -amount
    } else {
        amount
    }
}
