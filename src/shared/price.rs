//! Price utilities.
//!
//! The venue quotes every price as an integer number of cents.

use std::fmt;

/// Cents in one dollar.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Format a cent amount as a dollar string, e.g. `5125` → `"$51.25"`.
pub fn format_cents(cents: u64) -> String {
    format!(
        "${}.{:02}",
        cents / CENTS_PER_DOLLAR,
        cents % CENTS_PER_DOLLAR
    )
}

/// Errors from [`parse_cents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    Empty,
    InvalidDigits(String),
    TooManyDecimals(String),
    Overflow(String),
}

impl fmt::Display for PriceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceParseError::Empty => write!(f, "Price string is empty"),
            PriceParseError::InvalidDigits(s) => write!(f, "Invalid price '{}'", s),
            PriceParseError::TooManyDecimals(s) => {
                write!(f, "Price '{}' has more than two decimal places", s)
            }
            PriceParseError::Overflow(s) => write!(f, "Price '{}' is too large", s),
        }
    }
}

impl std::error::Error for PriceParseError {}

/// Parse a dollar string (`"51.25"`, `"$51.2"`, `"51"`) into cents.
pub fn parse_cents(input: &str) -> Result<u64, PriceParseError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(PriceParseError::Empty);
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
        return Err(PriceParseError::InvalidDigits(input.to_string()));
    }
    if frac.len() > 2 {
        return Err(PriceParseError::TooManyDecimals(input.to_string()));
    }

    let dollars: u64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| PriceParseError::Overflow(input.to_string()))?
    };
    let cents: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().unwrap_or(0) * 10,
        _ => frac.parse::<u64>().unwrap_or(0),
    };

    dollars
        .checked_mul(CENTS_PER_DOLLAR)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(|| PriceParseError::Overflow(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5125), "$51.25");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(100_000), "$1000.00");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("51.25"), Ok(5125));
        assert_eq!(parse_cents("$51.2"), Ok(5120));
        assert_eq!(parse_cents("51"), Ok(5100));
        assert_eq!(parse_cents(".5"), Ok(50));
        assert_eq!(parse_cents(" 0.07 "), Ok(7));
    }

    #[test]
    fn test_parse_cents_rejects_bad_input() {
        assert_eq!(parse_cents(""), Err(PriceParseError::Empty));
        assert_eq!(parse_cents("$"), Err(PriceParseError::Empty));
        assert!(matches!(parse_cents("1.234"), Err(PriceParseError::TooManyDecimals(_))));
        assert!(matches!(parse_cents("-1"), Err(PriceParseError::InvalidDigits(_))));
        assert!(matches!(parse_cents("."), Err(PriceParseError::InvalidDigits(_))));
        assert!(matches!(
            parse_cents("99999999999999999999"),
            Err(PriceParseError::Overflow(_))
        ));
    }
}
