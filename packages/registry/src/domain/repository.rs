//! Repository trait
//!
//! 会員データへのアクセスを抽象化します。
//! UseCase 層はこの trait に依存し、具体的な実装（インメモリ等）には依存しません（依存性の逆転）。

use async_trait::async_trait;

use super::{Member, MemberId, RepositoryError};

/// 会員 Repository
///
/// 実装は `Arc<dyn MemberRepository>` としてユースケースに注入されます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を保存する。同じ ID の会員が既に存在する場合は上書きする。
    async fn save(&self, member: Member) -> Result<(), RepositoryError>;

    /// ID で会員を取得する
    ///
    /// # Errors
    ///
    /// 該当する会員がいない場合は `RepositoryError::MemberNotFound`
    async fn find_by_id(&self, id: MemberId) -> Result<Member, RepositoryError>;

    /// 保存されている全ての会員を取得する（順序は不定）
    async fn find_all(&self) -> Vec<Member>;

    /// 保存されている会員数
    async fn count(&self) -> usize;
}
