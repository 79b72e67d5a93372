//! Session command implementation
//!
//! Resolves settings, asks for the course name when none was configured and
//! runs the interactive menu against a fresh in-memory course.

use std::io::{self, IsTerminal};

use crate::config::{Overrides, Settings};
use crate::domain::Course;
use crate::error::Result;
use crate::session::{InquirePrompter, LinePrompter, Prompter, Reply, Session};
use crate::ui::Palette;

const COURSE_PROMPT: &str = "Enter the course name to manage: ";

/// Run the interactive session
pub fn run(overrides: Overrides, palette: Palette) -> Result<()> {
    let settings = Settings::resolve(overrides)?;
    tracing::debug!(policy = %settings.duplicate_policy, "resolved settings");

    if io::stdin().is_terminal() {
        run_with(settings, InquirePrompter, palette)
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        run_with(settings, prompter, palette)
    }
}

fn run_with(settings: Settings, mut prompter: impl Prompter, palette: Palette) -> Result<()> {
    let course_name = match settings.course_name {
        Some(name) => name,
        None => match prompter.prompt(COURSE_PROMPT)? {
            Reply::Line(name) => name,
            // Nothing to manage without a course
            Reply::Cancelled | Reply::Closed => return Ok(()),
        },
    };

    let course = Course::with_policy(course_name, settings.duplicate_policy);
    let mut session = Session::new(course, prompter, io::stdout(), palette);
    session.run()
}
