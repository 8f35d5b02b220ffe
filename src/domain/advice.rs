use serde::{Deserialize, Serialize};

use super::{Category, Cents, Expense};

/// Dining spend above this fires the dining advisory.
pub const DINING_LIMIT_CENTS: Cents = 20_000;
/// Subscriptions spend above this fires the subscriptions advisory.
pub const SUBSCRIPTIONS_LIMIT_CENTS: Cents = 10_000;
/// More miscellaneous entries than this fires the categorization advisory.
pub const MISCELLANEOUS_COUNT_LIMIT: usize = 5;

/// A spending advisory produced by one of the threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    ReduceDining,
    ReviewSubscriptions,
    RecategorizeMiscellaneous,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::ReduceDining => {
                "Consider reducing dining out and cooking at home more often."
            }
            Advisory::ReviewSubscriptions => "Review and cancel unused subscriptions.",
            Advisory::RecategorizeMiscellaneous => {
                "Too many 'Miscellaneous' expenses. Consider categorizing them better."
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Outcome of a recommendation pass. Callers must be able to tell an empty
/// ledger (no evaluation happened) apart from a ledger that was evaluated
/// and tripped no rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Ledger is empty; there is nothing to evaluate.
    NoData,
    /// Rules were evaluated and none fired.
    Balanced,
    /// One or more rules fired, in rule order.
    Advisories(Vec<Advisory>),
}

/// Evaluate the fixed rule set against a ledger snapshot. Rules are
/// independent: every applicable rule fires, none suppresses another.
/// All thresholds are strict greater-than.
pub fn evaluate_advice(expenses: &[Expense]) -> Advice {
    if expenses.is_empty() {
        return Advice::NoData;
    }

    let mut advisories = Vec::new();

    let dining_total: Cents = expenses
        .iter()
        .filter(|e| e.category == Category::Dining)
        .map(|e| e.amount_cents)
        .sum();
    if dining_total > DINING_LIMIT_CENTS {
        advisories.push(Advisory::ReduceDining);
    }

    let subscriptions_total: Cents = expenses
        .iter()
        .filter(|e| e.category == Category::Subscriptions)
        .map(|e| e.amount_cents)
        .sum();
    if subscriptions_total > SUBSCRIPTIONS_LIMIT_CENTS {
        advisories.push(Advisory::ReviewSubscriptions);
    }

    let miscellaneous_count = expenses
        .iter()
        .filter(|e| e.category == Category::Miscellaneous)
        .count();
    if miscellaneous_count > MISCELLANEOUS_COUNT_LIMIT {
        advisories.push(Advisory::RecategorizeMiscellaneous);
    }

    if advisories.is_empty() {
        Advice::Balanced
    } else {
        Advice::Advisories(advisories)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn expense(category: Category, amount_cents: Cents) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Expense::new(date, category, amount_cents, "")
    }

    #[test]
    fn test_empty_ledger_is_no_data() {
        assert_eq!(evaluate_advice(&[]), Advice::NoData);
    }

    #[test]
    fn test_modest_spending_is_balanced() {
        let expenses = vec![
            expense(Category::Food, 5000),
            expense(Category::Dining, 10000),
        ];
        assert_eq!(evaluate_advice(&expenses), Advice::Balanced);
    }

    #[test]
    fn test_dining_boundary() {
        // Exactly at the limit: no advisory
        let at_limit = vec![expense(Category::Dining, 20_000)];
        assert_eq!(evaluate_advice(&at_limit), Advice::Balanced);

        // One cent over: advisory fires
        let over = vec![expense(Category::Dining, 20_001)];
        assert_eq!(
            evaluate_advice(&over),
            Advice::Advisories(vec![Advisory::ReduceDining])
        );
    }

    #[test]
    fn test_subscriptions_boundary() {
        let at_limit = vec![expense(Category::Subscriptions, 10_000)];
        assert_eq!(evaluate_advice(&at_limit), Advice::Balanced);

        let over = vec![expense(Category::Subscriptions, 10_001)];
        assert_eq!(
            evaluate_advice(&over),
            Advice::Advisories(vec![Advisory::ReviewSubscriptions])
        );
    }

    #[test]
    fn test_miscellaneous_count_boundary() {
        let five: Vec<Expense> = (0..5).map(|_| expense(Category::Miscellaneous, 100)).collect();
        assert_eq!(evaluate_advice(&five), Advice::Balanced);

        let six: Vec<Expense> = (0..6).map(|_| expense(Category::Miscellaneous, 100)).collect();
        assert_eq!(
            evaluate_advice(&six),
            Advice::Advisories(vec![Advisory::RecategorizeMiscellaneous])
        );
    }

    #[test]
    fn test_all_rules_fire_independently() {
        let mut expenses = vec![
            expense(Category::Dining, 25_000),
            expense(Category::Subscriptions, 15_000),
        ];
        expenses.extend((0..6).map(|_| expense(Category::Miscellaneous, 100)));

        assert_eq!(
            evaluate_advice(&expenses),
            Advice::Advisories(vec![
                Advisory::ReduceDining,
                Advisory::ReviewSubscriptions,
                Advisory::RecategorizeMiscellaneous,
            ])
        );
    }
}
