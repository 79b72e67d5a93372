//! Student domain types
//!
//! A student carries an identity and an ordered grade history, and computes
//! its own GPA on demand.

use std::fmt;

/// Opaque student identifier
///
/// Compared by exact text equality; numeric ids are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A student enrolled in a course
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    student_id: StudentId,
    /// Grades in entry order
    grades: Vec<f64>,
}

impl Student {
    /// Create a student with no grades recorded
    pub fn new(name: impl Into<String>, student_id: impl Into<StudentId>) -> Self {
        Self::with_grades(name, student_id, Vec::new())
    }

    /// Create a student with an initial grade list
    pub fn with_grades(
        name: impl Into<String>,
        student_id: impl Into<StudentId>,
        grades: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            grades,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    /// Append one grade
    pub fn add_single_grade(&mut self, grade: f64) {
        self.grades.push(grade);
    }

    /// Append every grade from `grades`, keeping their order
    pub fn add_grade_batch(&mut self, grades: impl IntoIterator<Item = f64>) {
        self.grades.extend(grades);
    }

    /// Arithmetic mean of the recorded grades, `0.0` when there are none
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, ID: {}, Average GPA: {:.2}",
            self.name,
            self.student_id,
            self.calculate_gpa()
        )
    }
}
