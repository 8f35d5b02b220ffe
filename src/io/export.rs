use anyhow::Result;
use std::io::Write;

use crate::domain::{format_cents, Expense};

/// Suggested file name when the export is offered as a download.
pub const EXPORT_FILE_NAME: &str = "expenses.csv";
/// MIME type for the download.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Export expenses to CSV in ledger order. Dates are ISO-8601 calendar
/// dates, amounts fixed two-decimal, text fields quoted per RFC 4180 when
/// they contain commas, quotes or newlines. Output is deterministic: the
/// same ledger always produces byte-identical CSV.
///
/// Returns the number of data rows written.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    let mut count = 0;
    for expense in expenses {
        csv_writer.write_record(&[
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.as_str().to_string(),
            format_cents(expense.amount_cents),
            expense.description.clone(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export expenses as an in-memory UTF-8 byte sequence.
pub fn expenses_to_csv_bytes(expenses: &[Expense]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    export_expenses_csv(expenses, &mut buffer)?;
    Ok(buffer)
}
