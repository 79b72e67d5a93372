//! Course domain types
//!
//! A course owns its roster of students in enrollment order. Lookups and
//! removals act on the first student whose id matches.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use super::student::Student;
use crate::error::{Result, roster::duplicate_student};

/// What enrolling a student whose id is already on the roster does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Enroll anyway; the roster may hold several students with one id
    #[default]
    Allow,
    /// Refuse the new student
    Reject,
    /// Swap the new student in at the existing student's position
    Replace,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DuplicatePolicy::Allow => "allow",
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful enrollment
#[derive(Debug, Clone, PartialEq)]
pub enum Enrollment {
    /// The student was appended to the roster
    Added,
    /// The student took the place of an earlier record with the same id
    Replaced(Student),
}

/// A single course and its roster
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    course_name: String,
    enrolled_students: Vec<Student>,
    duplicate_policy: DuplicatePolicy,
}

impl Course {
    /// Create a course with an empty roster that allows duplicate ids
    pub fn new(course_name: impl Into<String>) -> Self {
        Self::with_policy(course_name, DuplicatePolicy::default())
    }

    /// Create a course with an empty roster and the given duplicate policy
    pub fn with_policy(course_name: impl Into<String>, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            course_name: course_name.into(),
            enrolled_students: Vec::new(),
            duplicate_policy,
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Students in enrollment order
    pub fn students(&self) -> &[Student] {
        &self.enrolled_students
    }

    pub fn len(&self) -> usize {
        self.enrolled_students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrolled_students.is_empty()
    }

    /// Enroll a student according to the course's duplicate policy
    ///
    /// Only [`DuplicatePolicy::Reject`] can fail, and it leaves the roster
    /// untouched when it does.
    pub fn add_student(&mut self, student: Student) -> Result<Enrollment> {
        let existing = self.position_of(student.student_id().as_str());

        match (existing, self.duplicate_policy) {
            (Some(_), DuplicatePolicy::Reject) => {
                tracing::debug!(id = %student.student_id(), "rejected duplicate student id");
                Err(duplicate_student(student.student_id().as_str()))
            }
            (Some(index), DuplicatePolicy::Replace) => {
                tracing::debug!(id = %student.student_id(), index, "replacing enrolled student");
                let previous = std::mem::replace(&mut self.enrolled_students[index], student);
                Ok(Enrollment::Replaced(previous))
            }
            _ => {
                tracing::debug!(id = %student.student_id(), course = %self.course_name, "enrolling student");
                self.enrolled_students.push(student);
                Ok(Enrollment::Added)
            }
        }
    }

    /// Remove the first student with `student_id`, returning it
    ///
    /// Returns `None` and leaves the roster unchanged when no student matches.
    pub fn remove_student(&mut self, student_id: &str) -> Option<Student> {
        let index = self.position_of(student_id)?;
        tracing::debug!(id = student_id, index, "removing student");
        Some(self.enrolled_students.remove(index))
    }

    /// First student with `student_id`
    pub fn find_student(&self, student_id: &str) -> Option<&Student> {
        self.enrolled_students
            .iter()
            .find(|s| s.student_id().as_str() == student_id)
    }

    /// First student with `student_id`, for recording further grades
    pub fn find_student_mut(&mut self, student_id: &str) -> Option<&mut Student> {
        self.enrolled_students
            .iter_mut()
            .find(|s| s.student_id().as_str() == student_id)
    }

    /// Mean of every enrolled student's GPA, `0.0` for an empty roster
    ///
    /// Each student weighs the same regardless of how many grades they have.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_average_gpa(&self) -> f64 {
        if self.enrolled_students.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .enrolled_students
            .iter()
            .map(Student::calculate_gpa)
            .sum();
        total / self.enrolled_students.len() as f64
    }

    fn position_of(&self, student_id: &str) -> Option<usize> {
        self.enrolled_students
            .iter()
            .position(|s| s.student_id().as_str() == student_id)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course: {}", self.course_name)?;
        if self.enrolled_students.is_empty() {
            return write!(f, "No students enrolled.");
        }
        write!(f, "Enrolled students:")?;
        for student in &self.enrolled_students {
            write!(f, "\n{student}")?;
        }
        Ok(())
    }
}
