use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Cents, Expense};

/// Session-scoped expense ledger: an insertion-ordered sequence of expenses
/// plus the current monthly budget. Created at session start, mutated only
/// through its API, dropped at session end.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    budget_cents: Cents,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the end of the ledger. Input validation lives
    /// in the session service; a well-formed expense never fails here.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Overwrite the budget. Callers validate non-negativity first.
    pub fn set_budget(&mut self, budget_cents: Cents) {
        self.budget_cents = budget_cents;
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budget(&self) -> Cents {
        self.budget_cents
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Total spent for a category breakdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_cents: Cents,
}

/// Total spent on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_cents: Cents,
}

/// Sum of all expense amounts. Returns 0 for an empty ledger.
pub fn total_spent(expenses: &[Expense]) -> Cents {
    expenses.iter().map(|e| e.amount_cents).sum()
}

/// Fraction of the budget consumed, capped at 1.0.
/// Returns None when no budget is set, since progress is undefined then.
pub fn budget_progress(total_cents: Cents, budget_cents: Cents) -> Option<f64> {
    if budget_cents <= 0 {
        return None;
    }
    Some((total_cents as f64 / budget_cents as f64).min(1.0))
}

/// Group expenses by category and sum, sorted by descending total.
/// Ties keep the order in which categories first appear in the ledger
/// (the sort is stable and buckets are built in first-seen order).
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total_cents += expense.amount_cents,
            None => totals.push(CategoryTotal {
                category: expense.category,
                total_cents: expense.amount_cents,
            }),
        }
    }

    totals.sort_by(|a, b| b.total_cents.cmp(&a.total_cents));
    totals
}

/// Group expenses by calendar date and sum, sorted by ascending date.
pub fn by_day(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, Cents> = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.date).or_insert(0) += expense.amount_cents;
    }

    totals
        .into_iter()
        .map(|(date, total_cents)| DailyTotal { date, total_cents })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(date_str: &str, category: Category, amount_cents: Cents) -> Expense {
        Expense::new(date(date_str), category, amount_cents, "")
    }

    #[test]
    fn test_total_spent_empty() {
        assert_eq!(total_spent(&[]), 0);
    }

    #[test]
    fn test_total_spent_sums_amounts() {
        let expenses = vec![
            expense("2024-01-01", Category::Food, 1500),
            expense("2024-01-02", Category::Rent, 80000),
            expense("2024-01-03", Category::Food, 500),
        ];
        assert_eq!(total_spent(&expenses), 82000);
    }

    #[test]
    fn test_budget_progress_capped() {
        assert_eq!(budget_progress(60000, 50000), Some(1.0));
    }

    #[test]
    fn test_budget_progress_partial() {
        assert_eq!(budget_progress(25000, 50000), Some(0.5));
    }

    #[test]
    fn test_budget_progress_undefined_without_budget() {
        assert_eq!(budget_progress(25000, 0), None);
    }

    #[test]
    fn test_by_category_sorted_descending() {
        let expenses = vec![
            expense("2024-01-01", Category::Food, 1000),
            expense("2024-01-02", Category::Rent, 80000),
            expense("2024-01-03", Category::Food, 2000),
        ];

        let totals = by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, Category::Rent);
        assert_eq!(totals[0].total_cents, 80000);
        assert_eq!(totals[1].category, Category::Food);
        assert_eq!(totals[1].total_cents, 3000);
    }

    #[test]
    fn test_by_category_ties_keep_first_seen_order() {
        let expenses = vec![
            expense("2024-01-01", Category::Shopping, 5000),
            expense("2024-01-01", Category::Transport, 5000),
            expense("2024-01-01", Category::Food, 5000),
        ];

        let totals = by_category(&expenses);
        let order: Vec<Category> = totals.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![Category::Shopping, Category::Transport, Category::Food]
        );
    }

    #[test]
    fn test_by_day_sorted_ascending_no_duplicates() {
        let expenses = vec![
            expense("2024-01-03", Category::Food, 1000),
            expense("2024-01-01", Category::Food, 2000),
            expense("2024-01-03", Category::Dining, 3000),
        ];

        let totals = by_day(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, date("2024-01-01"));
        assert_eq!(totals[0].total_cents, 2000);
        assert_eq!(totals[1].date, date("2024-01-03"));
        assert_eq!(totals[1].total_cents, 4000);
    }

    #[test]
    fn test_ledger_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append(expense("2024-01-05", Category::Food, 100));
        ledger.append(expense("2024-01-01", Category::Rent, 200));

        assert_eq!(ledger.expenses()[0].date, date("2024-01-05"));
        assert_eq!(ledger.expenses()[1].date, date("2024-01-01"));
    }
}
