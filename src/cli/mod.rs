//! CLI definitions using clap derive API
//!
//! Global options configure the interactive session, which runs when no
//! subcommand is given. Argument types for the remaining commands live in
//! submodules:
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;
use crate::domain::DuplicatePolicy;

pub mod completions;

pub use completions::CompletionsArgs;

/// Roster - course roster manager
///
/// Enroll, remove and look up the students of one course and track their GPA.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Interactive course roster manager with GPA tracking",
    long_about = "Roster keeps the students of a single course in memory and lets you \
                  enroll, remove and search them from a menu, reporting each student's \
                  GPA and the course average. Nothing is written to disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  roster                              \x1b[90m# Ask for the course name, then show the menu\x1b[0m\n   \
                  roster -c \"Machine Learning\"        \x1b[90m# Manage a named course\x1b[0m\n   \
                  roster --duplicates reject          \x1b[90m# Refuse student IDs that are already enrolled\x1b[0m\n   \
                  roster completions zsh              \x1b[90m# Print zsh completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Course to manage (skips the course name prompt)
    #[arg(long, short = 'c', global = true, env = "ROSTER_COURSE")]
    pub course: Option<String>,

    /// What to do when a student ID is already enrolled
    #[arg(long, short = 'd', global = true, value_enum, env = "ROSTER_DUPLICATES")]
    pub duplicates: Option<DuplicatePolicy>,

    /// Configuration file (defaults to <config dir>/roster/config.yaml)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Session settings given on the command line or through the environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            course_name: self.course.clone(),
            duplicate_policy: self.duplicates,
            config_path: self.config.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive course menu (default)
    Session,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
