//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Mutex as StdMutex};

use async_trait::async_trait;
use member_registry::domain::{
    Grade, Member, MemberId, MemberName, MemberRepository, RepositoryError,
};

/// Build a member, panicking on invalid test input
pub fn member(id: i64, name: &str) -> Member {
    member_with_grade(id, name, Grade::Basic)
}

pub fn member_with_grade(id: i64, name: &str, grade: Grade) -> Member {
    Member::new(
        MemberId::new(id),
        MemberName::new(name.to_string()).expect("valid member name"),
        grade,
    )
}

/// Repository variant defined outside the crate.
///
/// Keeps members in a BTreeMap and records every call, so tests can check
/// that `MemberService` forwards to whatever repository it was given.
#[derive(Default)]
pub struct RecordingRepository {
    members: StdMutex<BTreeMap<MemberId, Member>>,
    calls: StdMutex<Vec<String>>,
}

impl RecordingRepository {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl MemberRepository for RecordingRepository {
    async fn save(&self, member: Member) -> Result<(), RepositoryError> {
        self.record(format!("save({})", member.id));
        self.members
            .lock()
            .expect("members lock")
            .insert(member.id, member);
        Ok(())
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Member, RepositoryError> {
        self.record(format!("find_by_id({id})"));
        self.members
            .lock()
            .expect("members lock")
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::MemberNotFound(id))
    }

    async fn find_all(&self) -> Vec<Member> {
        self.record("find_all".to_string());
        self.members
            .lock()
            .expect("members lock")
            .values()
            .cloned()
            .collect()
    }

    async fn count(&self) -> usize {
        self.members.lock().expect("members lock").len()
    }
}
