//! InMemory Repository 実装

mod member;

pub use member::{InMemoryMemberRepository, MemberStore};
