//! Input errors

use super::RosterError;

/// Creates an invalid grade error for the offending token
pub fn invalid_grade(token: impl Into<String>) -> RosterError {
    RosterError::InvalidGrade {
        token: token.into(),
    }
}

