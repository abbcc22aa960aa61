//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{MemberId, RepositoryError};

/// Errors returned by `MemberService::join`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinMemberError {
    /// The repository rejected the write
    #[error("failed to save member: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors returned by `MemberService::find_member`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindMemberError {
    #[error("member {0} not found")]
    NotFound(MemberId),
}

impl From<RepositoryError> for FindMemberError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::MemberNotFound(id) => FindMemberError::NotFound(id),
        }
    }
}
