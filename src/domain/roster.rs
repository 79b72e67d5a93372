//! Narrow interface between a front end and the course data model
//!
//! The interactive session only talks to a [`Roster`], so it can drive any
//! backing store that offers these operations.

use std::fmt;

use super::course::{Course, Enrollment};
use super::student::Student;
use crate::error::Result;

/// Roster operations a front end needs
///
/// The `Display` form is the full listing: course name, then every student.
pub trait Roster: fmt::Display {
    /// Name shown in listings
    fn course_name(&self) -> &str;

    /// Enroll a student
    fn add_student(&mut self, student: Student) -> Result<Enrollment>;

    /// Remove the first student with `student_id`
    fn remove_student(&mut self, student_id: &str) -> Option<Student>;

    /// Look up the first student with `student_id`
    fn find_student(&self, student_id: &str) -> Option<&Student>;

    /// Students in roster order
    fn students(&self) -> &[Student];

    /// Mean of per-student GPAs
    fn average_gpa(&self) -> f64;
}

impl Roster for Course {
    fn course_name(&self) -> &str {
        Course::course_name(self)
    }

    fn add_student(&mut self, student: Student) -> Result<Enrollment> {
        Course::add_student(self, student)
    }

    fn remove_student(&mut self, student_id: &str) -> Option<Student> {
        Course::remove_student(self, student_id)
    }

    fn find_student(&self, student_id: &str) -> Option<&Student> {
        Course::find_student(self, student_id)
    }

    fn students(&self) -> &[Student] {
        Course::students(self)
    }

    fn average_gpa(&self) -> f64 {
        self.calculate_average_gpa()
    }
}
