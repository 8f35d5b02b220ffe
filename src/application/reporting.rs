use serde::{Deserialize, Serialize};

use crate::domain::{Advice, CategoryTotal, Cents, DailyTotal, Expense};

/// Full output surface of a session: the expense log plus every derived
/// analytic, recomputed fresh from the ledger on each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub expenses: Vec<Expense>,
    pub total_spent_cents: Cents,
    pub budget_cents: Cents,
    /// Fraction of budget consumed, capped at 1.0. Absent when no budget
    /// is set.
    pub budget_progress: Option<f64>,
    /// Per-category totals, descending by total
    pub categories: Vec<CategoryTotal>,
    /// Per-day totals, ascending by date
    pub daily: Vec<DailyTotal>,
    pub advice: Advice,
}
