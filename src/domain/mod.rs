//! Domain models for Roster
//!
//! This module contains the course data model: students, the course that
//! owns them, and the [`Roster`] interface front ends program against.
//! Nothing here performs I/O.

pub mod course;
pub mod roster;
pub mod student;

pub use course::{Course, DuplicatePolicy, Enrollment};
pub use roster::Roster;
pub use student::{Student, StudentId};
