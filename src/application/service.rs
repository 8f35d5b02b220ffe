use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::{
    budget_progress, by_category, by_day, evaluate_advice, total_spent, Category, Cents, Expense,
    Ledger,
};
use crate::io::export::expenses_to_csv_bytes;

use super::{AppError, Snapshot};

/// Application service owning one session's ledger. This is the primary
/// interface for any client (CLI, TUI, web form, etc.). Each session gets
/// its own instance; nothing is shared across sessions.
#[derive(Debug, Default)]
pub struct SessionService {
    ledger: Ledger,
}

impl SessionService {
    /// Start a fresh session: empty ledger, no budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense. Rejects unknown categories and negative
    /// amounts; the ledger is untouched on rejection.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        category: &str,
        amount_cents: Cents,
        description: impl Into<String>,
    ) -> Result<Expense, AppError> {
        let category = Category::from_str(category)
            .ok_or_else(|| AppError::UnknownCategory(category.to_string()))?;

        if amount_cents < 0 {
            return Err(AppError::InvalidAmount(format!(
                "{} cents is negative",
                amount_cents
            )));
        }

        let expense = Expense::new(date, category, amount_cents, description);
        self.ledger.append(expense.clone());
        Ok(expense)
    }

    /// Set the monthly budget, replacing any previous value.
    pub fn set_budget(&mut self, amount_cents: Cents) -> Result<(), AppError> {
        if amount_cents < 0 {
            return Err(AppError::InvalidBudget(format!(
                "{} cents is negative",
                amount_cents
            )));
        }
        self.ledger.set_budget(amount_cents);
        Ok(())
    }

    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    pub fn budget(&self) -> Cents {
        self.ledger.budget()
    }

    /// Assemble the full output snapshot. Every derived value is recomputed
    /// from the ledger; nothing is cached between calls.
    pub fn snapshot(&self) -> Snapshot {
        let expenses = self.ledger.expenses();
        let total = total_spent(expenses);

        Snapshot {
            expenses: expenses.to_vec(),
            total_spent_cents: total,
            budget_cents: self.ledger.budget(),
            budget_progress: budget_progress(total, self.ledger.budget()),
            categories: by_category(expenses),
            daily: by_day(expenses),
            advice: evaluate_advice(expenses),
        }
    }

    /// Render the current ledger as CSV bytes, ready to be offered for
    /// download as `expenses.csv`.
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        expenses_to_csv_bytes(self.ledger.expenses())
    }
}
