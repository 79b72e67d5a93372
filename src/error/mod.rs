//! Error types and handling for Roster
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Grade parsing errors
//! - [`roster`]: Enrollment errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod input;
pub mod roster;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Roster operations
#[derive(Error, Diagnostic, Debug)]
pub enum RosterError {
    // Input errors
    #[error("Invalid grade '{token}': expected a number")]
    #[diagnostic(
        code(roster::input::invalid_grade),
        help("Enter grades as numbers separated by spaces, e.g. 95 88.5 100")
    )]
    InvalidGrade { token: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(roster::input::prompt_failed))]
    PromptFailed { message: String },

    // Roster errors
    #[error("Student ID '{id}' is already enrolled")]
    #[diagnostic(
        code(roster::enroll::duplicate_student),
        help("Remove the existing student first, or run with --duplicates replace")
    )]
    DuplicateStudent { id: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(roster::config::not_found),
        help("Check the --config flag or the ROSTER_CONFIG environment variable")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(roster::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(roster::config::parse_failed),
        help("Supported keys: course_name, duplicate_ids (allow, reject, replace)")
    )]
    ConfigParseFailed { path: String, reason: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(roster::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(roster::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RosterError {
    fn from(err: serde_yaml::Error) -> Self {
        RosterError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RosterError {
    fn from(err: inquire::InquireError) -> Self {
        RosterError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RosterError>;
