use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Cents};

/// A single recorded expense. Expenses are immutable once appended to the
/// ledger - there is no edit or delete within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date the expense occurred (no time component)
    pub date: NaiveDate,
    pub category: Category,
    /// Amount in cents (always >= 0)
    pub amount_cents: Cents,
    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create a new expense. Amount validation is the responsibility of
    /// the session service; this constructor enforces the invariant.
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount_cents: Cents,
        description: impl Into<String>,
    ) -> Self {
        assert!(amount_cents >= 0, "Expense amount must be non-negative");
        Self {
            date,
            category,
            amount_cents,
            description: description.into(),
        }
    }
}
