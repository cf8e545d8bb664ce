use std::fmt;

/// Money is tracked in whole currency units; fractional amounts are not supported.
pub type Units = i64;

/// Net balance of an account. Signed so that folds over imported data never overflow
/// into nonsense when a file contains more withdrawals than deposits.
pub type Balance = i64;

/// Format units as a dollar string.
/// Example: 100 -> "$100", -5 -> "-$5"
pub fn format_units(units: Balance) -> String {
    if units < 0 {
        format!("-${}", units.unsigned_abs())
    } else {
        format!("${}", units)
    }
}

/// Parse a user-entered amount. Amounts are non-negative whole numbers.
/// Example: "100" -> 100, " 7 " -> 7, "-3" -> Negative, "abc" -> NotANumber
pub fn parse_units(input: &str) -> Result<Units, ParseUnitsError> {
    let units: Units = input
        .trim()
        .parse()
        .map_err(|_| ParseUnitsError::NotANumber)?;
    if units < 0 {
        return Err(ParseUnitsError::Negative);
    }
    Ok(units)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseUnitsError {
    NotANumber,
    Negative,
}

impl fmt::Display for ParseUnitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseUnitsError::NotANumber => write!(f, "not a number"),
            ParseUnitsError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseUnitsError {}
