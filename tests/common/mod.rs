// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use smartspend::application::SessionService;

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Build a session pre-loaded with expenses given as
/// (date, category, amount_cents, description) tuples.
pub fn seeded_session(entries: &[(&str, &str, i64, &str)]) -> SessionService {
    let mut service = SessionService::new();
    for (date, category, amount_cents, description) in entries {
        service
            .add_expense(parse_date(date), category, *amount_cents, *description)
            .unwrap();
    }
    service
}

/// The two-expense dining scenario used across several suites.
pub fn dining_day_session() -> SessionService {
    seeded_session(&[
        ("2024-01-01", "Dining", 15000, "lunch"),
        ("2024-01-01", "Dining", 10000, "dinner"),
    ])
}
