//! Grade list parsing

use crate::error::{Result, input::invalid_grade};

/// Parse whitespace-separated grades, in order
///
/// Blank input yields an empty list. The first token that is not a number
/// fails the whole line.
pub fn parse_grades(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| token.parse::<f64>().map_err(|_| invalid_grade(token)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_parse_grades() {
        assert_eq!(parse_grades("95 99 100").unwrap(), vec![95.0, 99.0, 100.0]);
    }

    #[test]
    fn test_parse_grades_decimals_and_extra_spaces() {
        assert_eq!(
            parse_grades("  88.5\t92   -3 ").unwrap(),
            vec![88.5, 92.0, -3.0]
        );
    }

    #[test]
    fn test_parse_grades_empty() {
        assert!(parse_grades("").unwrap().is_empty());
        assert!(parse_grades("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_grades_names_bad_token() {
        let err = parse_grades("90 A+ 80").unwrap_err();
        assert!(matches!(err, RosterError::InvalidGrade { ref token } if token == "A+"));
    }

    #[test]
    fn test_parse_grades_rejects_comma_separated() {
        assert!(parse_grades("90,80").is_err());
    }
}
