//! Main menu of the interactive session

/// A top-level menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    RemoveStudent,
    SearchStudent,
    ListStudents,
    Exit,
}

impl MenuChoice {
    /// Entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddStudent,
        MenuChoice::RemoveStudent,
        MenuChoice::SearchStudent,
        MenuChoice::ListStudents,
        MenuChoice::Exit,
    ];

    /// Key the user types to pick this entry
    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "1",
            MenuChoice::RemoveStudent => "2",
            MenuChoice::SearchStudent => "3",
            MenuChoice::ListStudents => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add a student",
            MenuChoice::RemoveStudent => "Remove a student",
            MenuChoice::SearchStudent => "Search for a student",
            MenuChoice::ListStudents => "Display all students",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Match a line of user input against the menu keys
    ///
    /// Only the bare key is accepted; surrounding whitespace makes the
    /// choice unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}
