//! Candidate entity

use serde::{Deserialize, Serialize};

/// A student standing in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub faculty: String,
    pub year_of_study: u8,
    /// Campaign message, if the candidate supplied one
    pub campaign: Option<String>,
    /// Election the candidate is registered for
    pub election_id: i32,
}

/// Validated candidate data awaiting an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub faculty: String,
    pub year_of_study: u8,
    pub campaign: Option<String>,
    pub election_id: i32,
}

impl NewCandidate {
    pub fn with_id(self, id: i32) -> Candidate {
        Candidate {
            id,
            name: self.name,
            faculty: self.faculty,
            year_of_study: self.year_of_study,
            campaign: self.campaign,
            election_id: self.election_id,
        }
    }
}
