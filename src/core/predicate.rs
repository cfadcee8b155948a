pub const YEAR_COLUMN: &str = "year";
pub const MIN_YEAR: i64 = 2002;

/// Cell texts read as "no value" rather than as bad data.
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
    "#NA", "-1.#IND", "1.#IND", "-1.#QNAN", "1.#QNAN",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YearValue {
    Missing,
    Number(f64),
}

impl YearValue {
    /// `None` when the text is neither a missing-value token nor numeric.
    ///
    /// Digit text that overflows `f64` (`1e400`) still compares, as an
    /// infinity; spelled-out `inf`/`infinity` does not.
    pub fn parse(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if MISSING_TOKENS.contains(&trimmed) {
            return Some(YearValue::Missing);
        }

        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(YearValue::Number(n)),
            Ok(n) if n.is_infinite() && trimmed.bytes().any(|b| b.is_ascii_digit()) => {
                Some(YearValue::Number(n))
            }
            _ => None,
        }
    }
}

/// Keeps a row when its year column is at least `min_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearPredicate {
    pub column: String,
    pub min_year: i64,
}

impl Default for YearPredicate {
    fn default() -> Self {
        Self {
            column: YEAR_COLUMN.to_string(),
            min_year: MIN_YEAR,
        }
    }
}

impl YearPredicate {
    pub fn retains(&self, value: YearValue) -> bool {
        match value {
            YearValue::Number(n) => n >= self.min_year as f64,
            YearValue::Missing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_years() {
        let predicate = YearPredicate::default();
        assert!(predicate.retains(YearValue::Number(2002.0)));
        assert!(predicate.retains(YearValue::Number(2010.0)));
        assert!(!predicate.retains(YearValue::Number(2001.0)));
        assert!(!predicate.retains(YearValue::Number(2001.999)));
    }

    #[test]
    fn test_parse_integer_and_float_text() {
        assert_eq!(YearValue::parse("2002"), Some(YearValue::Number(2002.0)));
        assert_eq!(YearValue::parse(" 1999 "), Some(YearValue::Number(1999.0)));
        assert_eq!(YearValue::parse("2002.0"), Some(YearValue::Number(2002.0)));
        assert_eq!(YearValue::parse("2.002e3"), Some(YearValue::Number(2002.0)));
    }

    #[test]
    fn test_overflowing_numbers_still_compare() {
        let predicate = YearPredicate::default();

        let huge = YearValue::parse("1e400").unwrap();
        assert_eq!(huge, YearValue::Number(f64::INFINITY));
        assert!(predicate.retains(huge));

        let tiny = YearValue::parse("-1e400").unwrap();
        assert!(!predicate.retains(tiny));
    }

    #[test]
    fn test_missing_tokens_are_not_errors() {
        for token in ["", "  ", "NA", "NaN", "null", "<NA>", "#N/A"] {
            assert_eq!(YearValue::parse(token), Some(YearValue::Missing), "{token:?}");
        }
        assert!(!YearPredicate::default().retains(YearValue::Missing));
    }

    #[test]
    fn test_non_numeric_is_not_comparable() {
        assert_eq!(YearValue::parse("two thousand"), None);
        assert_eq!(YearValue::parse("2002a"), None);
        assert_eq!(YearValue::parse("inf"), None);
        assert_eq!(YearValue::parse("NAN"), None);
    }
}
