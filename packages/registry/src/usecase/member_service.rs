//! UseCase: 会員サービス（会員登録・会員検索）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MemberService::join() / find_member() / list_members()
//! - Repository への委譲と、未登録 ID に対する NotFound の返却
//!
//! ### なぜこのテストが必要か
//! - MemberService が具体的な Repository 実装に依存していないことを保証する
//!   （モック Repository に差し替えても同じように動作する）
//! - 登録した会員が ID で取得できることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：会員登録後の検索
//! - 異常系：未登録 ID の検索
//! - エッジケース：同一 ID の再登録（後勝ち）

use std::sync::Arc;

use crate::domain::{Member, MemberId, MemberRepository};

use super::error::{FindMemberError, JoinMemberError};

/// 会員サービス
///
/// Repository はコンストラクタで注入され、このサービス自身は具体的な実装を生成しません。
#[derive(Clone)]
pub struct MemberService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    /// 新しい MemberService を作成
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// 会員登録
    ///
    /// 同じ ID の会員が既に登録されている場合は上書きされます（後勝ち）。
    pub async fn join(&self, member: Member) -> Result<(), JoinMemberError> {
        tracing::debug!("join: member_id={}", member.id);
        let id = member.id;
        self.repository.save(member).await?;
        tracing::info!("Member {} joined", id);
        Ok(())
    }

    /// 会員検索
    ///
    /// # Returns
    ///
    /// * `Ok(Member)` - 登録済みの会員
    /// * `Err(FindMemberError::NotFound)` - 未登録の ID
    pub async fn find_member(&self, id: MemberId) -> Result<Member, FindMemberError> {
        tracing::debug!("find_member: member_id={}", id);
        self.repository.find_by_id(id).await.map_err(|e| {
            tracing::debug!("Lookup miss: {}", e);
            FindMemberError::from(e)
        })
    }

    /// 登録済みの全会員（ID 昇順）
    pub async fn list_members(&self) -> Vec<Member> {
        tracing::debug!("list_members");
        let mut members = self.repository.find_all().await;

        // Sort by id for consistent ordering
        members.sort_by_key(|m| m.id);

        members
    }
}
