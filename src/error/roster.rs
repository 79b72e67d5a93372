//! Enrollment errors

use super::RosterError;

/// Creates a duplicate student error
pub fn duplicate_student(id: impl Into<String>) -> RosterError {
    RosterError::DuplicateStudent { id: id.into() }
}
