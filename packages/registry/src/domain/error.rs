//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::MemberId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MemberId is not an integer
    #[error("MemberId must be an integer (got: {0})")]
    MemberIdInvalidFormat(String),

    /// MemberName validation error
    #[error("MemberName cannot be empty")]
    MemberNameEmpty,

    /// MemberName too long error
    #[error("MemberName cannot exceed {max} characters (got {actual})")]
    MemberNameTooLong { max: usize, actual: usize },

    /// Grade is neither basic nor vip
    #[error("Grade must be one of basic, vip (got: {0})")]
    GradeUnknown(String),
}

/// Errors returned by `MemberRepository` implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),
}
