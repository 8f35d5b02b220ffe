use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use std::io::Read;

use crate::application::SessionService;
use crate::domain::parse_cents;

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred on one line during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Load expenses from a `Date,Category,Amount,Description` CSV into a
/// session. Bad lines are collected as errors and skipped; good lines are
/// still imported, so one malformed row does not abort the whole file.
pub fn import_expenses_csv<R: Read>(
    reader: R,
    service: &mut SessionService,
) -> Result<ImportResult> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut imported = 0;
    let mut errors = Vec::new();

    for (line_num, result) in csv_reader.records().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        let date_str = record.get(0).unwrap_or("");
        let category = record.get(1).unwrap_or("");
        let amount_str = record.get(2).unwrap_or("");
        let description = record.get(3).unwrap_or("");

        let date = match parse_expense_date(date_str) {
            Ok(d) => d,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("Date".to_string()),
                    error: format!("Invalid date: {}", e),
                });
                continue;
            }
        };

        let amount_cents = match parse_cents(amount_str) {
            Ok(a) => a,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("Amount".to_string()),
                    error: format!("Invalid amount: {}", e),
                });
                continue;
            }
        };

        match service.add_expense(date, category, amount_cents, description) {
            Ok(_) => imported += 1,
            Err(e) => errors.push(ImportError {
                line,
                field: Some("Category".to_string()),
                error: e.to_string(),
            }),
        }
    }

    Ok(ImportResult { imported, errors })
}

// Accept plain calendar dates and full RFC 3339 timestamps; only the date
// component is kept either way.
fn parse_expense_date(s: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    anyhow::bail!("unsupported date format: {}", s)
}
