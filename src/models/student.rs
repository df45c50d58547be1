//! Student entity

use serde::{Deserialize, Serialize};

/// A registered voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub name: String,
    /// University-issued student number, unique across students
    pub student_id: String,
    pub faculty: String,
    pub year_of_study: u8,
    pub has_voted: bool,
}

/// Validated student data awaiting an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub student_id: String,
    pub faculty: String,
    pub year_of_study: u8,
    pub has_voted: bool,
}

impl NewStudent {
    pub fn with_id(self, id: i32) -> Student {
        Student {
            id,
            name: self.name,
            student_id: self.student_id,
            faculty: self.faculty,
            year_of_study: self.year_of_study,
            has_voted: self.has_voted,
        }
    }
}
