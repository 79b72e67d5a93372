//! Roster - course roster manager
//!
//! Keeps the students of a single course in memory, supports enrollment,
//! removal and lookup, and computes per-student and course-wide GPA. The
//! [`session`] module provides the interactive menu; any other front end can
//! drive a [`domain::Course`] through the [`domain::Roster`] trait.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod session;
pub mod ui;

pub use domain::{Course, DuplicatePolicy, Enrollment, Roster, Student, StudentId};
pub use error::{Result, RosterError};
