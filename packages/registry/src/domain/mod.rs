//! Domain layer for the member registry.
//!
//! This module contains the member model and the repository abstraction
//! the use cases depend on. It knows nothing about concrete storage.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::Member;
pub use error::{RepositoryError, ValueObjectError};
pub use repository::MemberRepository;
pub use value_object::{Grade, MemberId, MemberName};
