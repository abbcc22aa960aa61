//! InMemory Member Repository 実装
//!
//! ドメイン層が定義する MemberRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセス終了とともにデータは失われます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Member, MemberId, MemberRepository, RepositoryError};

/// 会員データの格納先（複数の Repository で共有可能）
pub type MemberStore = Arc<Mutex<HashMap<MemberId, Member>>>;

/// インメモリ Member Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の MemberRepository trait を実装します（依存性の逆転）。
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    store: MemberStore,
}

impl InMemoryMemberRepository {
    /// 空のストアを持つ InMemoryMemberRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のストアを共有する InMemoryMemberRepository を作成
    ///
    /// 同じストアを渡した Repository 同士は同じ会員データを参照します。
    pub fn with_store(store: MemberStore) -> Self {
        Self { store }
    }

    /// このリポジトリが使用しているストア
    pub fn store(&self) -> MemberStore {
        self.store.clone()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, member: Member) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;
        if let Some(previous) = store.insert(member.id, member) {
            tracing::debug!("Overwrote member {}", previous.id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Member, RepositoryError> {
        let store = self.store.lock().await;
        store
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::MemberNotFound(id))
    }

    async fn find_all(&self) -> Vec<Member> {
        let store = self.store.lock().await;
        store.values().cloned().collect()
    }

    async fn count(&self) -> usize {
        let store = self.store.lock().await;
        store.len()
    }
}
