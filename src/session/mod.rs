//! Interactive course management session
//!
//! A synchronous read-evaluate-print loop: show the menu, read a choice,
//! run the matching roster operation and print the outcome. Only terminal
//! I/O failures end the loop early; everything else is reported and the
//! menu comes back.

pub mod grades;
pub mod menu;
pub mod prompt;

pub use grades::parse_grades;
pub use menu::MenuChoice;
pub use prompt::{InquirePrompter, LinePrompter, Prompter, Reply};

use std::io::Write;

use crate::domain::{Enrollment, Roster, Student};
use crate::error::Result;
use crate::ui::{Palette, report_error};

const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
const NOT_FOUND: &str = "Student not found.";

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Answer to a question asked in the middle of a step
enum Answer {
    Given(String),
    /// The step ends early; carry on with this flow
    Stop(Flow),
}

/// Take the answer or end the current step with the flow the prompt dictated
macro_rules! ask_or_stop {
    ($session:ident, $message:expr) => {
        match $session.ask($message)? {
            Answer::Given(answer) => answer,
            Answer::Stop(flow) => return Ok(flow),
        }
    };
}

/// Interactive session over a roster
pub struct Session<R, P, W> {
    roster: R,
    prompter: P,
    out: W,
    palette: Palette,
}

impl<R: Roster, P: Prompter, W: Write> Session<R, P, W> {
    pub fn new(roster: R, prompter: P, out: W, palette: Palette) -> Self {
        Self {
            roster,
            prompter,
            out,
            palette,
        }
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    /// Give back the roster once the session is over
    pub fn into_roster(self) -> R {
        self.roster
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(course = self.roster.course_name(), "session started");

        loop {
            self.show_menu()?;
            let input = match self.prompter.prompt(CHOICE_PROMPT)? {
                Reply::Line(input) => input,
                Reply::Cancelled => continue,
                Reply::Closed => break,
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                tracing::debug!(input = %input, "unrecognized menu choice");
                writeln!(
                    self.out,
                    "{}",
                    self.palette
                        .notice()
                        .apply_to("Invalid choice. Please enter a number between 1 and 5.")
                )?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Exiting...")?;
        self.out.flush()?;
        tracing::debug!(students = self.roster.students().len(), "session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.heading().apply_to("Course Management System")
        )?;
        for choice in MenuChoice::ALL {
            writeln!(
                self.out,
                "{} {}",
                self.palette
                    .option_key()
                    .apply_to(format!("{}.", choice.key())),
                choice.label()
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::RemoveStudent => self.remove_student(),
            MenuChoice::SearchStudent => self.search_student(),
            MenuChoice::ListStudents => self.list_students(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Ask one question of the current step
    fn ask(&mut self, message: &str) -> Result<Answer> {
        match self.prompter.prompt(message)? {
            Reply::Line(answer) => Ok(Answer::Given(answer)),
            Reply::Cancelled => {
                writeln!(self.out, "{}", self.palette.dim().apply_to("Cancelled."))?;
                Ok(Answer::Stop(Flow::Continue))
            }
            Reply::Closed => Ok(Answer::Stop(Flow::Exit)),
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        let name = ask_or_stop!(self, "Enter student name: ");
        let student_id = ask_or_stop!(self, "Enter student ID: ");
        let grades_input = ask_or_stop!(
            self,
            "Enter grades separated by space (hit enter if none): "
        );

        let grades = match parse_grades(&grades_input) {
            Ok(grades) => grades,
            Err(err) => {
                report_error(&mut self.out, self.palette, &err)?;
                return Ok(Flow::Continue);
            }
        };

        match self
            .roster
            .add_student(Student::with_grades(name, student_id.as_str(), grades))
        {
            Ok(Enrollment::Added) => {
                writeln!(
                    self.out,
                    "{}",
                    self.palette.success().apply_to("Student added successfully.")
                )?;
            }
            Ok(Enrollment::Replaced(previous)) => {
                writeln!(
                    self.out,
                    "{}",
                    self.palette
                        .success()
                        .apply_to(format!("Student {student_id} replaced."))
                )?;
                writeln!(
                    self.out,
                    "  {} {previous}",
                    self.palette.dim().apply_to("previous:")
                )?;
            }
            Err(err) => report_error(&mut self.out, self.palette, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_student(&mut self) -> Result<Flow> {
        let student_id = ask_or_stop!(self, "Enter student ID to remove: ");

        if self.roster.remove_student(&student_id).is_some() {
            writeln!(
                self.out,
                "{}",
                self.palette.success().apply_to("Student removed successfully.")
            )?;
        } else {
            writeln!(self.out, "{}", self.palette.notice().apply_to(NOT_FOUND))?;
        }
        Ok(Flow::Continue)
    }

    fn search_student(&mut self) -> Result<Flow> {
        let student_id = ask_or_stop!(self, "Enter student ID to search for: ");

        match self.roster.find_student(&student_id) {
            Some(student) => writeln!(
                self.out,
                "{} {student}",
                self.palette.success().apply_to("Student found:")
            )?,
            None => writeln!(self.out, "{}", self.palette.notice().apply_to(NOT_FOUND))?,
        }
        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> Result<Flow> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.heading().apply_to("Current Course Enrollment:")
        )?;
        writeln!(self.out, "{}", self.roster)?;
        if !self.roster.students().is_empty() {
            writeln!(
                self.out,
                "Course average GPA: {:.2}",
                self.roster.average_gpa()
            )?;
        }
        Ok(Flow::Continue)
    }
}
