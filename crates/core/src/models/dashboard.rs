use serde::{Deserialize, Serialize};

use super::transaction::DEFAULT_CATEGORY;

/// Monthly spending ceiling a fresh dashboard starts with.
pub const DEFAULT_MONTHLY_BUDGET: f64 = 100_000.0;

/// The add-expense form as the user is typing it.
///
/// `amount` stays a raw string until submission; parsing happens when
/// the form is submitted, so the draft can hold whatever was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Client-local dashboard state: the add-expense modal, the delete
/// confirmation, and the session-scoped budget ceiling.
///
/// None of this outlives the session, and the budget ceiling in
/// particular is never sent to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Whether the add-expense modal is showing.
    pub add_modal_open: bool,

    /// The form being typed into the modal.
    pub draft: ExpenseDraft,

    /// Record id armed for delete confirmation, if any.
    pub pending_delete: Option<String>,

    /// Spending ceiling the budget view compares against.
    pub monthly_budget: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            add_modal_open: false,
            draft: ExpenseDraft::default(),
            pending_delete: None,
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the add-expense modal. The draft keeps whatever was typed
    /// on a previous visit; only a successful submission clears it.
    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    /// Hide the modal without submitting. The draft is kept.
    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    /// Clear the form and close the modal after a successful create.
    pub fn finish_add(&mut self) {
        self.draft = ExpenseDraft::default();
        self.add_modal_open = false;
    }

    /// Arm the delete confirmation for a record.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    /// Disarm the delete confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
