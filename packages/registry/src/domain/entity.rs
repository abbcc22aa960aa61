//! Core domain models for the member registry.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_object::{Grade, MemberId, MemberName};

/// A registered member
///
/// Immutable once created. Two members are equal when every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member identifier
    pub id: MemberId,
    /// Display name
    pub name: MemberName,
    /// Membership grade
    pub grade: Grade,
}

impl Member {
    /// Create a new member
    pub fn new(id: MemberId, name: MemberName, grade: Grade) -> Self {
        Self { id, name, grade }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.grade)
    }
}
