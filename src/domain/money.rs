use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// $50.00 = 5000 cents. Expense amounts and budgets are never negative.
pub type Cents = i64;

/// Format cents as a fixed two-decimal string.
/// Example: 5000 -> "50.00", 1 -> "0.01"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Negative values are rejected: nothing in this domain carries a
/// negative amount.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseCentsError::Negative);
    }

    let parts: Vec<&str> = input.split('.').collect();
    match parts.len() {
        1 => {
            let units: i64 = parts[0]
                .parse()
                .map_err(|_| ParseCentsError::InvalidFormat)?;
            Ok(units * 100)
        }
        2 => {
            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| ParseCentsError::InvalidFormat)?
            };

            // The decimal part must be plain ASCII digits; anything else
            // (signs, letters, multibyte characters) is malformed. This
            // also keeps the truncating slice below on char boundaries.
            let decimal_str = parts[1];
            if !decimal_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseCentsError::InvalidFormat);
            }
            let decimal_cents: i64 = match decimal_str.len() {
                0 => 0,
                1 => {
                    decimal_str
                        .parse::<i64>()
                        .map_err(|_| ParseCentsError::InvalidFormat)?
                        * 10
                }
                2 => decimal_str
                    .parse()
                    .map_err(|_| ParseCentsError::InvalidFormat)?,
                _ => decimal_str[..2]
                    .parse()
                    .map_err(|_| ParseCentsError::InvalidFormat)?,
            };

            Ok(units * 100 + decimal_cents)
        }
        _ => Err(ParseCentsError::InvalidFormat),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Negative,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Negative => write!(f, "amount cannot be negative"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
